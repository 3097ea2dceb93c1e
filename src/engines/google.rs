//! Google web translation endpoint (`translate_a/single`).
//!
//! The payload is a JSON array of arrays with purely positional
//! meaning. All positions used by the decoder are named below; the
//! shape is undocumented and reverse engineered, so every access is
//! defensive.

use serde_json::Value;

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::Engine;

const DEFAULT_HOST: &str = "translate.googleapis.com";

const BROWSER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";

/// Positional layout of the top-level payload array
const SENTENCES: usize = 0;
const DICTIONARY: usize = 1;
const ALTERNATIVES: usize = 5;
const DEFINITIONS: usize = 12;

/// A sentence row carries the phonetic when it has exactly this many elements
const PHONETIC_ROW_LEN: usize = 4;

/// Google web translation engine
#[derive(Debug)]
pub struct GoogleEngine {
    host: String,
    client: HttpClient,
}

impl GoogleEngine {
    /// Create the engine; no API key is needed
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let host = settings
            .get("host")
            .unwrap_or(DEFAULT_HOST)
            .to_string();
        let client = HttpClient::from_settings(&settings, Some(BROWSER_AGENT))?;
        Ok(Self { host, client })
    }
}

impl Engine for GoogleEngine {
    fn name(&self) -> &'static str {
        "google"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let url = format!("https://{}/translate_a/single", self.host);
        let query = [
            ("client", "gtx"),
            ("sl", source_lang.as_str()),
            ("tl", target_lang.as_str()),
            ("dt", "at"),
            ("dt", "bd"),
            ("dt", "ex"),
            ("dt", "ld"),
            ("dt", "md"),
            ("dt", "qca"),
            ("dt", "rw"),
            ("dt", "rm"),
            ("dt", "ss"),
            ("dt", "t"),
            ("q", text),
        ];
        let body = self.client.get(&url, &query, &[])?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("google", e.to_string()))?;
        decode_payload(&source_lang, &target_lang, text, &payload)
    }
}

/// Normalize the raw positional payload into the common result shape
fn decode_payload(
    source_lang: &str,
    target_lang: &str,
    text: &str,
    payload: &Value,
) -> Result<TranslationResult> {
    let rows = payload
        .as_array()
        .ok_or_else(|| TranslationError::decode("google", "payload is not an array"))?;

    let definition = decode_definition(rows);
    let mut result = TranslationResult::new("google", source_lang, target_lang, text);
    result.phonetic = decode_phonetic(rows);
    result.explain = Some(decode_explain(rows));
    result.detail = decode_detail(rows);
    result.alternative = decode_alternative(rows, &definition);
    result.definition = Some(definition);
    Ok(result)
}

/// The first sentence row with exactly four elements carries the phonetic
fn decode_phonetic(rows: &[Value]) -> Option<String> {
    rows.get(SENTENCES)?
        .as_array()?
        .iter()
        .find(|row| row.as_array().map_or(false, |r| r.len() == PHONETIC_ROW_LEN))
        .and_then(|row| row[PHONETIC_ROW_LEN - 1].as_str())
        .map(str::to_string)
}

/// Primary definition: the translated halves of every sentence row
fn decode_definition(rows: &[Value]) -> String {
    let mut definition = String::new();
    if let Some(sentences) = rows.get(SENTENCES).and_then(Value::as_array) {
        for row in sentences {
            if let Some(part) = row.get(0).and_then(Value::as_str) {
                definition.push_str(part);
            }
        }
    }
    definition
}

/// One line per part-of-speech group: `[pos] meaning1;meaning2;...;`
fn decode_explain(rows: &[Value]) -> Vec<String> {
    let mut explain = Vec::new();
    if let Some(groups) = rows.get(DICTIONARY).and_then(Value::as_array) {
        for group in groups {
            let pos = group.get(0).and_then(Value::as_str).unwrap_or("");
            let mut line = format!("[{pos}] ");
            if let Some(meanings) = group.get(2).and_then(Value::as_array) {
                for meaning in meanings {
                    if let Some(word) = meaning.get(0).and_then(Value::as_str) {
                        line.push_str(word);
                        line.push(';');
                    }
                }
            }
            explain.push(line);
        }
    }
    explain
}

/// Word-sense breakdown; only present when the payload reaches the
/// definitions slot, otherwise the whole field stays absent
fn decode_detail(rows: &[Value]) -> Option<Vec<String>> {
    if rows.len() <= DEFINITIONS {
        return None;
    }
    let mut detail = Vec::new();
    if let Some(groups) = rows[DEFINITIONS].as_array() {
        for group in groups {
            let pos = group.get(0).and_then(Value::as_str).unwrap_or("");
            detail.push(format!("[{pos}]"));
            if let Some(senses) = group.get(1).and_then(Value::as_array) {
                for sense in senses {
                    if let Some(gloss) = sense.get(0).and_then(Value::as_str) {
                        detail.push(format!("- {gloss}"));
                    }
                    if let Some(example) = sense.get(2).and_then(Value::as_str) {
                        detail.push(format!("  * {example}"));
                    }
                }
            }
        }
    }
    Some(detail)
}

/// Alternative renderings, minus anything equal to the primary definition;
/// absent entirely when the payload is too short to carry the slot
fn decode_alternative(rows: &[Value], definition: &str) -> Option<Vec<String>> {
    if rows.len() <= ALTERNATIVES {
        return None;
    }
    let mut alternative = Vec::new();
    if let Some(chunks) = rows[ALTERNATIVES].as_array() {
        for chunk in chunks {
            if let Some(candidates) = chunk.get(2).and_then(Value::as_array) {
                for candidate in candidates {
                    if let Some(alt) = candidate.get(0).and_then(Value::as_str) {
                        if alt != definition {
                            alternative.push(format!("- {alt}"));
                        }
                    }
                }
            }
        }
    }
    Some(alternative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A trimmed payload in the shape the endpoint actually returns
    fn full_payload() -> Value {
        json!([
            [["长", "long"], [null, null, null, "lɔːŋ"]],
            [["adjective", ["长"], [["长", ["long"]], ["久"]]]],
            null,
            null,
            null,
            [["long", null, [["长"], ["长长"], ["久"]]]],
            null,
            null,
            null,
            null,
            null,
            null,
            [[
                "adjective",
                [
                    ["measuring a great distance", null, "a long road"],
                    ["of time"]
                ]
            ]]
        ])
    }

    #[test]
    fn test_phonetic_comes_from_four_element_row() {
        let payload = full_payload();
        assert_eq!(
            decode_phonetic(payload.as_array().unwrap()),
            Some("lɔːŋ".to_string())
        );
    }

    #[test]
    fn test_phonetic_absent_without_matching_row() {
        let payload = json!([[["长", "long"]]]);
        assert_eq!(decode_phonetic(payload.as_array().unwrap()), None);
    }

    #[test]
    fn test_definition_concatenates_sentence_rows() {
        let payload = json!([[["很长的", "a long"], ["句子", "sentence"]]]);
        assert_eq!(decode_definition(payload.as_array().unwrap()), "很长的句子");
    }

    #[test]
    fn test_explain_formats_part_of_speech_groups() {
        let payload = full_payload();
        let explain = decode_explain(payload.as_array().unwrap());
        assert_eq!(explain, vec!["[adjective] 长;久;".to_string()]);
    }

    #[test]
    fn test_detail_absent_when_payload_is_short() {
        let payload = json!([[["长", "long"]], []]);
        assert_eq!(decode_detail(payload.as_array().unwrap()), None);
    }

    #[test]
    fn test_detail_lines_with_examples() {
        let payload = full_payload();
        let detail = decode_detail(payload.as_array().unwrap()).unwrap();
        assert_eq!(
            detail,
            vec![
                "[adjective]".to_string(),
                "- measuring a great distance".to_string(),
                "  * a long road".to_string(),
                "- of time".to_string(),
            ]
        );
    }

    #[test]
    fn test_alternative_absent_when_payload_is_short() {
        let payload = json!([[["长", "long"]], [], null, null, null]);
        assert_eq!(decode_alternative(payload.as_array().unwrap(), "长"), None);
    }

    #[test]
    fn test_alternative_excludes_primary_definition() {
        let payload = full_payload();
        let alternative =
            decode_alternative(payload.as_array().unwrap(), "长").unwrap();
        assert_eq!(alternative, vec!["- 长长".to_string(), "- 久".to_string()]);
    }

    #[test]
    fn test_decode_of_ascii_query() {
        let (sl, tl) = guess_language("auto", "auto", "long");
        assert_eq!((sl.as_str(), tl.as_str()), ("en", "zh-CN"));
        let result = decode_payload(&sl, &tl, "long", &full_payload()).unwrap();
        assert_eq!(result.text, "long");
        assert_eq!(result.engine, "google");
        assert!(!result.definition.as_deref().unwrap().is_empty());
    }

    #[test]
    fn test_decode_of_non_ascii_query() {
        let (sl, tl) = guess_language("auto", "auto", "长");
        assert_eq!((sl.as_str(), tl.as_str()), ("zh-CN", "en"));
    }

    #[test]
    fn test_non_array_payload_is_a_decode_error() {
        let payload = json!({"error": "captcha"});
        assert!(decode_payload("en", "zh-CN", "long", &payload).is_err());
    }
}
