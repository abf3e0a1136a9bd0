use serde::{Deserialize, Serialize};

pub const AUTO_LANGUAGE: &str = "auto";

// A single translation job, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    target_language: String,
    source_language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: AUTO_LANGUAGE.to_string(),
        }
    }

    pub fn with_source(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }
}

/// What happened to one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    Translated(String),
    Fallback { original: String, error: String },
}

impl ChunkOutcome {
    /// Text to splice into the final translation.
    pub fn text(&self) -> &str {
        match self {
            ChunkOutcome::Translated(text) => text,
            ChunkOutcome::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ChunkOutcome::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSuccess {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub chunks_processed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailure {
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    pub error: String,
}

/// Outcome of a whole translation run.
///
/// Serializes to a flat record (`success`, `originalText`, `translatedText`, ...)
/// so callers that only know the JSON shape can consume it. A failure always
/// reports the original text as its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TranslationRecord", try_from = "TranslationRecord")]
pub enum TranslationResult {
    Success(TranslationSuccess),
    Failure(TranslationFailure),
}

impl TranslationResult {
    pub fn failure(request: &TranslationRequest, error: impl ToString) -> Self {
        TranslationResult::Failure(TranslationFailure {
            original_text: request.text().to_string(),
            source_language: request.source_language().to_string(),
            target_language: request.target_language().to_string(),
            error: error.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success(_))
    }

    pub fn original_text(&self) -> &str {
        match self {
            TranslationResult::Success(s) => &s.original_text,
            TranslationResult::Failure(f) => &f.original_text,
        }
    }

    pub fn translated_text(&self) -> &str {
        match self {
            TranslationResult::Success(s) => &s.translated_text,
            TranslationResult::Failure(f) => &f.original_text,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TranslationResult::Success(_) => None,
            TranslationResult::Failure(f) => Some(&f.error),
        }
    }
}

// Wire shape of TranslationResult
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationRecord {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    original_text: String,
    translated_text: String,
    source_language: String,
    target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chunks_processed: Option<usize>,
}

impl From<TranslationResult> for TranslationRecord {
    fn from(result: TranslationResult) -> Self {
        match result {
            TranslationResult::Success(s) => Self {
                success: true,
                error: None,
                original_text: s.original_text,
                translated_text: s.translated_text,
                source_language: s.source_language,
                target_language: s.target_language,
                chunks_processed: Some(s.chunks_processed),
            },
            TranslationResult::Failure(f) => Self {
                success: false,
                error: Some(f.error),
                translated_text: f.original_text.clone(),
                original_text: f.original_text,
                source_language: f.source_language,
                target_language: f.target_language,
                chunks_processed: None,
            },
        }
    }
}

impl TryFrom<TranslationRecord> for TranslationResult {
    type Error = String;

    fn try_from(record: TranslationRecord) -> Result<Self, Self::Error> {
        if record.success {
            let chunks_processed = record
                .chunks_processed
                .ok_or("successful result is missing chunksProcessed")?;
            Ok(TranslationResult::Success(TranslationSuccess {
                original_text: record.original_text,
                translated_text: record.translated_text,
                source_language: record.source_language,
                target_language: record.target_language,
                chunks_processed,
            }))
        } else {
            Ok(TranslationResult::Failure(TranslationFailure {
                original_text: record.original_text,
                source_language: record.source_language,
                target_language: record.target_language,
                error: record.error.unwrap_or_default(),
            }))
        }
    }
}
