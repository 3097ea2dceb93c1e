//! Core data models shared by every translation engine

use serde::{Deserialize, Serialize};

/// One translation request, consumed synchronously by a single engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Engine name the request is routed to
    pub engine: String,
    /// Source language, `"auto"` when unspecified
    pub source_lang: String,
    /// Target language, `"auto"` when unspecified
    pub target_lang: String,
    /// Text to translate; never empty
    pub text: String,
}

impl TranslationRequest {
    /// Create a request; empty language fields fall back to `"auto"`
    pub fn new(engine: &str, source: &str, target: &str, text: impl Into<String>) -> Self {
        let or_auto = |lang: &str| {
            if lang.is_empty() {
                "auto".to_string()
            } else {
                lang.to_string()
            }
        };
        Self {
            engine: engine.to_string(),
            source_lang: or_auto(source),
            target_lang: or_auto(target),
            text: text.into(),
        }
    }
}

/// Normalized translation result shared by every provider.
///
/// `engine`, `source_lang`, `target_lang` and `text` are always set.
/// The optional fields distinguish "provider does not supply this"
/// (`None`, omitted from JSON output) from "provider returned nothing
/// for this query" (`Some` of an empty string or vector).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Engine that produced the result
    pub engine: String,
    /// Resolved source language
    pub source_lang: String,
    /// Resolved target language
    pub target_lang: String,
    /// The text that was translated
    pub text: String,
    /// Phonetic transcription of the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Primary translation / short definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Dictionary-style explanation lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<Vec<String>>,
    /// Sentence translation, for providers that only translate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Word-sense breakdown lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<String>>,
    /// Alternative translation lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Vec<String>>,
}

impl TranslationResult {
    /// Create a result with the mandatory fields populated
    pub fn new(engine: &str, source_lang: &str, target_lang: &str, text: &str) -> Self {
        Self {
            engine: engine.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            text: text.to_string(),
            phonetic: None,
            definition: None,
            explain: None,
            translation: None,
            detail: None,
            alternative: None,
        }
    }
}
