use crate::domain::error::TranslateError;
use crate::domain::language::LANGUAGES;
use crate::domain::model::TranslationResult;
use crate::interfaces::cli::OutputFormat;
use colored::Colorize;
use std::fmt::Write;
use std::io::IsTerminal;

/// What to print for a result: the primary output and an optional error line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: Option<String>,
}

pub fn render(result: &TranslationResult, format: OutputFormat) -> Result<Rendered, TranslateError> {
    match format {
        OutputFormat::Json => Ok(Rendered {
            // serde_json keeps non-ASCII as-is
            stdout: serde_json::to_string_pretty(result)?,
            stderr: None,
        }),
        OutputFormat::Text => Ok(match result.error() {
            None => Rendered {
                stdout: result.translated_text().to_string(),
                stderr: None,
            },
            Some(error) => Rendered {
                stdout: result.original_text().to_string(),
                stderr: Some(format!("Error: {}", error)),
            },
        }),
    }
}

pub fn print_rendered(rendered: &Rendered) {
    if let Some(line) = &rendered.stderr {
        eprintln!("{}", paint_error(line, stderr_color_enabled()));
    }
    println!("{}", rendered.stdout);
}

/// Colour `line` red when `color` is set, regardless of where stdout goes
pub fn paint_error(line: &str, color: bool) -> String {
    if !color {
        return line.to_string();
    }
    // colored only looks at stdout, so force it for this line
    colored::control::set_override(true);
    let painted = line.red().to_string();
    colored::control::unset_override();
    painted
}

// NO_COLOR / CLICOLOR_FORCE / CLICOLOR, then whether stderr is a terminal
fn stderr_color_enabled() -> bool {
    let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }
    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Format the language catalog, one `code  name` per line
pub fn format_languages() -> String {
    let mut output = String::new();
    for lang in LANGUAGES {
        writeln!(output, "{:<4} {}", lang.code, lang.name).ok();
    }
    output
}
