use crate::domain::error::TranslateError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

/// Google Translate (`translate_a/single`, gtx client) backend
pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Build a translator from config, validating the endpoint and proxy.
    pub fn from_config(config: &Config) -> Result<Self, TranslateError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            TranslateError::Config(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;
        let client = create_client(config)?;
        Ok(Self::new(client, endpoint))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        tracing::debug!(
            "POST {} ({} chars, {} -> {})",
            self.endpoint,
            text.chars().count(),
            source,
            target
        );

        // Text goes in the body so long chunks don't blow the URL limit
        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("client", "gtx"), ("sl", source), ("tl", target), ("dt", "t")])
            .form(&[("q", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Translation service error body: {}", body);
            return Err(TranslateError::Api(format!(
                "Translation service returned {}",
                status
            )));
        }

        let body: Value = response.json().await?;
        parse_translation(&body)
    }
}

/// Pull the translated text out of a `translate_a/single` reply.
///
/// The reply is a nested array; the service splits long input into
/// segments at `[0][i]`, each carrying its translation at index 0.
pub fn parse_translation(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Api("Unexpected response: missing segments".to_string()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translation.is_empty() {
        return Err(TranslateError::Api(
            "Empty translation received".to_string(),
        ));
    }

    Ok(translation)
}
