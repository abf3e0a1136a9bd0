use crate::domain::error::TranslateError;
use async_trait::async_trait;

/// Trait for translation services
///
/// The pipeline only ever talks to this trait, so the network-backed
/// implementation can be swapped for an in-process one in tests.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` into `target`.
    ///
    /// `source` may be `"auto"` to let the service detect the language.
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, TranslateError>;
}
