//! Youdao web translation, authenticated with the desktop client's
//! hardcoded id/secret pair rather than user-supplied credentials.

use serde_json::Value;

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::sign::{md5_hex, request_salt};
use crate::engines::Engine;

const TRANSLATE_URL: &str = "https://fanyi.youdao.com/translate_o?smartresult=dict&smartresult=rule";

/// Fixed client id/secret lifted from the desktop web client
const CLIENT_ID: &str = "fanyideskweb";
const CLIENT_SECRET: &str = "97_3(jkMYg@T[KZQmqjTK";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.2; rv:51.0) Gecko/20100101 Firefox/51.0";
const COOKIE: &str = "OUTFOX_SEARCH_USER_ID=-2022895048@10.168.8.76;";
const REFERER: &str = "http://fanyi.youdao.com/";

/// Youdao web translation engine
#[derive(Debug)]
pub struct YoudaoEngine {
    client: HttpClient,
}

/// Desktop-client signature over the text and a per-request salt
pub(crate) fn sign_request(text: &str, salt: &str) -> String {
    md5_hex(&format!("{CLIENT_ID}{text}{salt}{CLIENT_SECRET}"))
}

impl YoudaoEngine {
    /// Create the engine; the fixed credentials need no configuration
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let client = HttpClient::from_settings(&settings, Some(USER_AGENT))?;
        Ok(Self { client })
    }
}

impl Engine for YoudaoEngine {
    fn name(&self) -> &'static str {
        "youdao"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let salt = request_salt();
        let sign = sign_request(text, &salt);
        let form = [
            ("i", text),
            ("from", source_lang.as_str()),
            ("to", target_lang.as_str()),
            ("smartresult", "dict"),
            ("client", CLIENT_ID),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
            ("doctype", "json"),
            ("version", "2.1"),
            ("keyfrom", "fanyi.web"),
            ("action", "FY_BY_CL1CKBUTTON"),
            ("typoResult", "true"),
        ];
        let headers = [("Cookie", COOKIE), ("Referer", REFERER)];
        let body = self.client.post_form(TRANSLATE_URL, &form, &headers)?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("youdao", e.to_string()))?;

        let mut result = TranslationResult::new("youdao", &source_lang, &target_lang, text);
        result.definition = Some(decode_definition(&payload));
        result.explain = Some(decode_explain(&payload));
        Ok(result)
    }
}

/// `translateResult` holds line groups of parallel source/target pairs;
/// each group's targets are joined with ", " and the groups concatenated
fn decode_definition(payload: &Value) -> String {
    let mut definition = String::new();
    if let Some(groups) = payload.get("translateResult").and_then(Value::as_array) {
        for group in groups {
            let parts: Vec<&str> = group
                .as_array()
                .map(|pairs| {
                    pairs
                        .iter()
                        .filter_map(|pair| pair.get("tgt").and_then(Value::as_str))
                        .filter(|tgt| !tgt.is_empty())
                        .collect()
                })
                .unwrap_or_default();
            if !parts.is_empty() {
                definition.push_str(&parts.join(", "));
            }
        }
    }
    definition
}

/// Dictionary entries from `smartResult`, one line each, CR/LF stripped
fn decode_explain(payload: &Value) -> Vec<String> {
    let mut explain = Vec::new();
    if let Some(entries) = payload
        .get("smartResult")
        .and_then(|smart| smart.get("entries"))
        .and_then(Value::as_array)
    {
        for entry in entries {
            if let Some(entry) = entry.as_str() {
                if !entry.is_empty() {
                    explain.push(entry.replace(['\r', '\n'], ""));
                }
            }
        }
    }
    explain
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signature_matches_known_digest() {
        assert_eq!(
            sign_request("kiss", "1700000000000"),
            "48fb21f58c41daeb79fb5cbece1c47d8"
        );
    }

    #[test]
    fn test_signature_changes_with_salt_and_text() {
        let reference = sign_request("kiss", "1700000000000");
        assert_eq!(sign_request("kiss", "1700000000000"), reference);
        assert_ne!(sign_request("kiss", "1700000000001"), reference);
        assert_ne!(sign_request("kisses", "1700000000000"), reference);
    }

    #[test]
    fn test_definition_joins_pairs_per_group() {
        let payload = json!({
            "translateResult": [
                [{"src": "kiss", "tgt": "吻"}, {"src": "me", "tgt": "我"}],
                [{"src": "now", "tgt": "现在"}]
            ]
        });
        assert_eq!(decode_definition(&payload), "吻, 我现在");
    }

    #[test]
    fn test_definition_empty_when_result_missing() {
        assert_eq!(decode_definition(&json!({"errorCode": 50})), "");
    }

    #[test]
    fn test_explain_strips_line_breaks() {
        let payload = json!({
            "smartResult": {
                "entries": ["", "kiss\r\n", "n. 吻；轻触\r\n"],
                "type": 1
            }
        });
        assert_eq!(
            decode_explain(&payload),
            vec!["kiss".to_string(), "n. 吻；轻触".to_string()]
        );
    }
}
