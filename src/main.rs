// Main entry point
use clap::Parser;
use doctrans::application::{translate_text, TranslateOptions};
use doctrans::domain::model::TranslationRequest;
use doctrans::infrastructure::config::{self, load_config, Logging};
use doctrans::infrastructure::glossary::GlossaryTranslator;
use doctrans::infrastructure::network::GoogleTranslator;
use doctrans::interfaces::cli::{Cli, Provider};
use doctrans::presentation::output::{format_languages, print_rendered, render};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    init_logging(&config.logging)?;

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.list_languages {
        print!("{}", format_languages());
        return Ok(());
    }

    let (Some(text), Some(target)) = (cli.text, cli.target) else {
        anyhow::bail!("--text and --target are required");
    };

    let mut options = config.translate_options();
    if let Some(max) = cli.max_chunk_chars {
        options.max_chunk_chars = usize::try_from(max)?;
    }
    if let Some(delay) = cli.delay_ms {
        options.request_delay = Duration::from_millis(delay);
    }

    let request = TranslationRequest::new(text, target).with_source(cli.source);
    let result = match cli.provider {
        Provider::Google => {
            translate_text(&request, &options, || GoogleTranslator::from_config(&config)).await
        }
        Provider::Glossary => {
            translate_text(&request, &TranslateOptions::offline(), GlossaryTranslator::new).await
        }
    };

    // Both outcomes print and exit normally
    print_rendered(&render(&result, cli.output)?);

    Ok(())
}

/// Initialize logging with path and level configuration
///
/// Logs never go to stdout, which carries the translation. With logging
/// disabled, warnings still reach stderr.
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_level()));

    let path = logging.path.as_deref().filter(|p| logging.enable && !p.is_empty());
    if let Some(path) = path {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
