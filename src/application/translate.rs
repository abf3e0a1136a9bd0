use crate::application::chunk::split_into_chunks;
use crate::domain::error::TranslateError;
use crate::domain::language::is_known_language;
use crate::domain::model::{
    ChunkOutcome, TranslationRequest, TranslationResult, TranslationSuccess,
};
use crate::domain::traits::Translator;
use std::time::Duration;

pub const DEFAULT_MAX_CHUNK_CHARS: usize = 4500;
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Knobs for one translation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    pub max_chunk_chars: usize,
    /// Pause before every request except the first
    pub request_delay: Duration,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl TranslateOptions {
    /// Options for a local backend: no request limit to respect, so the
    /// text goes through as one chunk with no throttle.
    pub fn offline() -> Self {
        Self {
            max_chunk_chars: usize::MAX,
            request_delay: Duration::ZERO,
        }
    }
}

/// Translate a request end to end.
///
/// `connect` builds the translator for this run only. If it fails the result
/// is a failure that echoes the original text; failures of individual chunks
/// never fail the run.
pub async fn translate_text<T, F>(
    request: &TranslationRequest,
    options: &TranslateOptions,
    connect: F,
) -> TranslationResult
where
    T: Translator,
    F: FnOnce() -> Result<T, TranslateError>,
{
    if !is_known_language(request.target_language()) {
        tracing::warn!(
            "Target language '{}' is not in the language catalog, passing it through",
            request.target_language()
        );
    }

    let translator = match connect() {
        Ok(translator) => translator,
        Err(e) => {
            tracing::error!("Failed to create translation client: {}", e);
            return TranslationResult::failure(request, e);
        }
    };

    let chunks = split_into_chunks(request.text(), options.max_chunk_chars);
    tracing::debug!(
        "Split {} chars into {} chunk(s)",
        request.text().chars().count(),
        chunks.len()
    );

    let outcomes = translate_chunks(&translator, &chunks, request, options.request_delay).await;
    assemble(request, outcomes)
}

/// Translate each chunk in order, substituting the original text for any
/// chunk the service fails on.
pub async fn translate_chunks<T: Translator + ?Sized>(
    translator: &T,
    chunks: &[&str],
    request: &TranslationRequest,
    delay: Duration,
) -> Vec<ChunkOutcome> {
    let total = chunks.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let outcome = match translator
            .translate(chunk, request.source_language(), request.target_language())
            .await
        {
            Ok(translated) => {
                tracing::info!("Translated chunk {}/{}", i + 1, total);
                ChunkOutcome::Translated(translated)
            }
            Err(e) => {
                tracing::warn!("Error translating chunk {}: {}", i + 1, e);
                ChunkOutcome::Fallback {
                    original: chunk.to_string(),
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Join chunk outputs into the final successful result.
pub fn assemble(request: &TranslationRequest, outcomes: Vec<ChunkOutcome>) -> TranslationResult {
    let fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count();
    if fallbacks > 0 {
        tracing::warn!(
            "{} of {} chunk(s) were left untranslated",
            fallbacks,
            outcomes.len()
        );
    }

    let translated_text = outcomes
        .iter()
        .map(ChunkOutcome::text)
        .collect::<Vec<_>>()
        .join(" ");

    TranslationResult::Success(TranslationSuccess {
        original_text: request.text().to_string(),
        translated_text,
        source_language: request.source_language().to_string(),
        target_language: request.target_language().to_string(),
        chunks_processed: outcomes.len(),
    })
}
