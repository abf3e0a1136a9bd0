use crate::domain::error::TranslateError;
use crate::domain::language::LANGUAGES;
use crate::domain::traits::Translator;
use crate::infrastructure::glossary_terms::{glossary, summary_heading};
use async_trait::async_trait;
use regex::{NoExpand, Regex};
use std::collections::HashMap;

type CompiledGlossary = Vec<(Regex, &'static str)>;

/// Offline translator that swaps legal terms for their glossary entries.
///
/// Terms match case-insensitively on whole words. The rest of the text is
/// left in English, so this is a fallback for when the network service is
/// unavailable rather than a real translation.
pub struct GlossaryTranslator {
    glossaries: HashMap<&'static str, CompiledGlossary>,
}

impl GlossaryTranslator {
    pub fn new() -> Result<Self, TranslateError> {
        let mut glossaries = HashMap::new();
        for code in LANGUAGES.iter().map(|lang| lang.code) {
            let Some(terms) = glossary(code) else {
                continue;
            };
            let compiled = terms
                .iter()
                .map(|(term, translated)| {
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                        .map(|re| (re, *translated))
                        .map_err(|e| {
                            TranslateError::Init(format!("Bad glossary term '{}': {}", term, e))
                        })
                })
                .collect::<Result<CompiledGlossary, _>>()?;
            glossaries.insert(code, compiled);
        }
        Ok(Self { glossaries })
    }

    /// Apply the glossary for `target` to `text`
    pub fn translate_terms(&self, text: &str, target: &str) -> String {
        if target == "en" {
            return text.to_string();
        }
        if text.trim().is_empty() {
            return String::new();
        }

        let Some(terms) = self.glossaries.get(target) else {
            tracing::debug!("No glossary available for {}", target);
            return text.to_string();
        };

        let mut translated = text.to_string();
        for (pattern, replacement) in terms {
            translated = pattern
                .replace_all(&translated, NoExpand(*replacement))
                .into_owned();
        }

        match summary_heading(target) {
            Some(heading) => format!("{}\n\n{}", heading, translated),
            None => translated,
        }
    }
}

#[async_trait]
impl Translator for GlossaryTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        Ok(self.translate_terms(text, target))
    }
}
