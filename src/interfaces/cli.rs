use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// Google Translate over the network
    #[default]
    Google,
    /// Offline legal glossary
    Glossary,
}

#[derive(Parser, Debug)]
#[command(name = "doctrans")]
#[command(about = "Translate long text chunk by chunk.")]
#[command(version)]
pub struct Cli {
    /// Text to translate
    #[arg(long, required_unless_present_any = ["list_languages", "generate_config"])]
    pub text: Option<String>,

    /// Target language code (e.g. hi, ta, te)
    #[arg(long, required_unless_present_any = ["list_languages", "generate_config"])]
    pub target: Option<String>,

    /// Source language code
    #[arg(long, default_value = "auto")]
    pub source: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Translation backend
    #[arg(long, value_enum, default_value_t = Provider::Google)]
    pub provider: Provider,

    /// Override the maximum characters per request
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_chunk_chars: Option<u64>,

    /// Override the pause between requests, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// List known language codes
    #[arg(long)]
    pub list_languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,
}
