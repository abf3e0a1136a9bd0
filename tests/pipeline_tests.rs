//! Translation pipeline tests

use async_trait::async_trait;
use doctrans::application::translate::{translate_chunks, translate_text, TranslateOptions};
use doctrans::domain::error::TranslateError;
use doctrans::domain::model::{ChunkOutcome, TranslationRequest, TranslationResult};
use doctrans::domain::traits::Translator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Uppercases text and records every call
#[derive(Default)]
struct RecordingTranslator {
    calls: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl Translator for RecordingTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string(), target.to_string()));
        Ok(text.to_uppercase())
    }
}

/// Fails on the given call indices (0-based)
struct FlakyTranslator {
    fail_on: Vec<usize>,
    count: AtomicUsize,
}

impl FlakyTranslator {
    fn new(fail_on: Vec<usize>) -> Self {
        Self {
            fail_on,
            count: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Translator for FlakyTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, TranslateError> {
        let n = self.count.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.contains(&n) {
            Err(TranslateError::Api(format!("service unavailable for call {}", n)))
        } else {
            Ok(format!("<{}>", text))
        }
    }
}

fn no_delay(max_chunk_chars: usize) -> TranslateOptions {
    TranslateOptions {
        max_chunk_chars,
        request_delay: Duration::ZERO,
    }
}

fn long_text(sentences: usize) -> String {
    (0..sentences)
        .map(|i| format!("This is sentence number {} of the agreement", i))
        .collect::<Vec<_>>()
        .join(". ")
        + "."
}

#[tokio::test]
async fn test_short_text_is_translated_in_one_call() {
    let request = TranslationRequest::new("Hello world.", "hi");
    let result = translate_text(&request, &no_delay(4500), || Ok(RecordingTranslator::default())).await;

    let TranslationResult::Success(success) = result else {
        panic!("expected success");
    };
    assert_eq!(success.original_text, "Hello world.");
    assert_eq!(success.translated_text, "HELLO WORLD.");
    assert_eq!(success.source_language, "auto");
    assert_eq!(success.target_language, "hi");
    assert_eq!(success.chunks_processed, 1);
}

#[tokio::test]
async fn test_chunks_are_sent_in_order_with_request_languages() {
    let translator = RecordingTranslator::default();
    let request = TranslationRequest::new("ignored", "ta").with_source("en");
    let chunks = ["First.", "Second.", "Third."];

    let outcomes = translate_chunks(&translator, &chunks, &request, Duration::ZERO).await;

    let calls = translator.calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    for (call, chunk) in calls.iter().zip(chunks) {
        assert_eq!(call.0, chunk);
        assert_eq!(call.1, "en");
        assert_eq!(call.2, "ta");
    }
    assert_eq!(outcomes[1], ChunkOutcome::Translated("SECOND.".to_string()));
}

#[tokio::test]
async fn test_failed_chunk_falls_back_to_original_text() {
    let translator = FlakyTranslator::new(vec![1]);
    let request = TranslationRequest::new("ignored", "te");
    let chunks = ["One.", "Two.", "Three."];

    let outcomes = translate_chunks(&translator, &chunks, &request, Duration::ZERO).await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].text(), "<One.>");
    assert!(matches!(
        &outcomes[1],
        ChunkOutcome::Fallback { original, error } if original == "Two." && error.contains("call 1")
    ));
    assert_eq!(outcomes[2].text(), "<Three.>");
}

#[tokio::test]
async fn test_partial_failure_still_reports_success() {
    let text = long_text(60);
    let request = TranslationRequest::new(text.clone(), "hi");
    let options = no_delay(500);
    let expected_chunks = doctrans::application::split_into_chunks(&text, 500);
    assert!(expected_chunks.len() > 2);

    let result = translate_text(&request, &options, || Ok(FlakyTranslator::new(vec![0]))).await;

    let TranslationResult::Success(success) = result else {
        panic!("per-chunk failures must not fail the run");
    };
    assert_eq!(success.chunks_processed, expected_chunks.len());
    // First chunk kept verbatim, the rest wrapped by the fake
    assert!(success.translated_text.starts_with(&format!("{} <", expected_chunks[0])));
    let rest: Vec<String> = expected_chunks[1..].iter().map(|c| format!("<{}>", c)).collect();
    assert!(success.translated_text.ends_with(&rest.join(" ")));
}

#[tokio::test]
async fn test_every_chunk_failing_returns_original_sentences() {
    let text = long_text(30);
    let request = TranslationRequest::new(text.clone(), "kn");

    let result = translate_text(&request, &no_delay(300), || {
        Ok(FlakyTranslator::new((0..100).collect()))
    })
    .await;

    assert!(result.is_success());
    assert_eq!(result.translated_text(), text);
}

#[tokio::test]
async fn test_client_construction_failure_echoes_original() {
    let request = TranslationRequest::new("Hello world.", "hi");
    let result = translate_text(&request, &no_delay(4500), || {
        Err::<RecordingTranslator, _>(TranslateError::Init("no client".to_string()))
    })
    .await;

    assert!(!result.is_success());
    assert_eq!(result.original_text(), "Hello world.");
    assert_eq!(result.translated_text(), "Hello world.");
    assert!(!result.error().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_invalid_endpoint_fails_whole_run() {
    use doctrans::infrastructure::config::Config;
    use doctrans::infrastructure::network::GoogleTranslator;

    let config = Config {
        endpoint: "::not-a-url::".to_string(),
        ..Config::default()
    };
    let request = TranslationRequest::new("Hello world.", "hi");
    let result = translate_text(&request, &config.translate_options(), || {
        GoogleTranslator::from_config(&config)
    })
    .await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["translatedText"], "Hello world.");
    assert!(json["error"].as_str().unwrap().contains("endpoint"));
}

#[tokio::test]
async fn test_delay_is_applied_between_requests_only() {
    let translator = RecordingTranslator::default();
    let request = TranslationRequest::new("ignored", "hi");
    let delay = Duration::from_millis(20);

    let started = std::time::Instant::now();
    translate_chunks(&translator, &["only"], &request, delay).await;
    assert!(started.elapsed() < delay);

    let started = std::time::Instant::now();
    translate_chunks(&translator, &["a", "b", "c"], &request, delay).await;
    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_glossary_provider_translates_whole_text_once() {
    use doctrans::infrastructure::glossary::GlossaryTranslator;

    let text = format!("{} The contract ends on termination.", long_text(200));
    let request = TranslationRequest::new(text.clone(), "hi");
    let result = translate_text(&request, &TranslateOptions::offline(), GlossaryTranslator::new).await;

    let TranslationResult::Success(success) = result else {
        panic!("expected success");
    };
    assert_eq!(success.chunks_processed, 1);
    assert!(success.translated_text.starts_with("कानूनी दस्तावेज़ सारांश:\n\n"));
    assert_eq!(success.translated_text.matches("सारांश:").count(), 1);
    assert!(success.translated_text.ends_with("The अनुबंध ends on समाप्ति."));
}

#[tokio::test]
async fn test_glossary_provider_passes_english_through() {
    use doctrans::infrastructure::glossary::GlossaryTranslator;

    let request = TranslationRequest::new("The contract.", "en");
    let result = translate_text(&request, &TranslateOptions::offline(), GlossaryTranslator::new).await;
    assert_eq!(result.translated_text(), "The contract.");
}

#[tokio::test]
#[ignore = "talks to the live translation service"]
async fn test_live_translation_to_hindi() {
    use doctrans::infrastructure::config::Config;
    use doctrans::infrastructure::network::GoogleTranslator;

    let config = Config::default();
    let request = TranslationRequest::new("Hello world.", "hi");
    let result = translate_text(&request, &config.translate_options(), || {
        GoogleTranslator::from_config(&config)
    })
    .await;

    let TranslationResult::Success(success) = result else {
        panic!("expected success");
    };
    assert_eq!(success.original_text, "Hello world.");
    assert!(!success.translated_text.is_empty());
    assert_eq!(success.chunks_processed, 1);
}
