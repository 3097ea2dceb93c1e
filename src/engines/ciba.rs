//! iCIBA (词霸) web translation, a keyed JSON endpoint with no
//! authentication. Every field is extracted defensively.

use serde_json::Value;

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::Engine;

const TRANSLATE_URL: &str = "https://fy.iciba.com/ajax.php";

/// iCIBA translation engine
#[derive(Debug)]
pub struct CibaEngine {
    client: HttpClient,
}

impl CibaEngine {
    /// Create the engine; no credentials needed
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let client = HttpClient::from_settings(&settings, None)?;
        Ok(Self { client })
    }
}

impl Engine for CibaEngine {
    fn name(&self) -> &'static str {
        "ciba"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let query = [
            ("a", "fy"),
            ("f", source_lang.as_str()),
            ("t", target_lang.as_str()),
            ("w", text),
        ];
        let body = self.client.get(TRANSLATE_URL, &query, &[])?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("ciba", e.to_string()))?;

        let mut result = TranslationResult::new("ciba", &source_lang, &target_lang, text);
        decode_content(&payload, &mut result);
        Ok(result)
    }
}

/// Pull the known keys out of `content`; anything missing stays absent
fn decode_content(payload: &Value, result: &mut TranslationResult) {
    result.definition = Some(String::new());
    let content = match payload.get("content") {
        Some(content) => content,
        None => return,
    };
    if let Some(out) = content.get("out") {
        result.definition = Some(out.as_str().unwrap_or("").to_string());
    }
    if let Some(phonetic) = content.get("ph_en") {
        result.phonetic = Some(phonetic.as_str().unwrap_or("").to_string());
    }
    if let Some(word_mean) = content.get("word_mean") {
        let explain = match word_mean {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Value::String(line) => vec![line.clone()],
            _ => Vec::new(),
        };
        result.explain = Some(explain);
    }
}
