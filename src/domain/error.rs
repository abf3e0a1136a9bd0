use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Start-up error: {0}")]
    Init(String),

    #[error("API Error: {0}")]
    Api(String),
}
