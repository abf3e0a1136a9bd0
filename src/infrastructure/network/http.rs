// HTTP client utilities
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create the HTTP client used for one translation run
pub fn create_client(config: &Config) -> Result<Client, TranslateError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str());

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy)
            .map_err(|e| TranslateError::Config(format!("Invalid http_proxy '{}': {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| TranslateError::Init(format!("Failed to build HTTP client: {}", e)))
}
