//! DeepLX, a self-hosted DeepL-compatible endpoint. The service URL
//! comes from the configuration; an API key is optional.

use serde_json::{json, Value};

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::Engine;

const BROWSER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";

/// DeepLX translation engine; requires a `url` setting
#[derive(Debug)]
pub struct DeeplxEngine {
    url: String,
    apikey: Option<String>,
    client: HttpClient,
}

/// DeepL folds all Chinese variants into one source language
fn provider_source(lang: &str) -> String {
    match lang {
        "zh-CN" | "zh-CHS" | "zh-CHT" => "ZH".to_string(),
        "en" | "en-US" => "EN".to_string(),
        other => other.to_string(),
    }
}

/// Target codes keep the simplified/traditional distinction
fn provider_target(lang: &str) -> String {
    match lang {
        "zh-CN" => "ZH".to_string(),
        "zh-CHS" => "ZH-HANS".to_string(),
        "zh-CHT" => "ZH-HANT".to_string(),
        "en" | "en-US" => "EN".to_string(),
        other => other.to_string(),
    }
}

impl DeeplxEngine {
    /// Create the engine; fails when no endpoint URL is configured
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let url = settings.require("url")?;
        let apikey = settings.get("apikey").map(str::to_string);
        let client = HttpClient::from_settings(&settings, Some(BROWSER_AGENT))?;
        Ok(Self {
            url,
            apikey,
            client,
        })
    }

    /// Only the optional bearer token; the JSON body supplies the
    /// content type on its own
    fn request_headers(&self) -> Vec<(&'static str, String)> {
        match &self.apikey {
            Some(apikey) => vec![("Authorization", format!("Bearer {apikey}"))],
            None => Vec::new(),
        }
    }
}

impl Engine for DeeplxEngine {
    fn name(&self) -> &'static str {
        "deeplx"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let source_lang = provider_source(&source_lang);
        let target_lang = provider_target(&target_lang);

        let mut request_body = json!({
            "text": text,
            "target_lang": target_lang,
        });
        if source_lang != "auto" {
            request_body["source_lang"] = Value::String(source_lang.clone());
        }

        let headers = self.request_headers();
        let headers: Vec<(&str, &str)> = headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        let body = self
            .client
            .post_json(&self.url, &[], &request_body, &headers)?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("deeplx", e.to_string()))?;

        let mut result = TranslationResult::new("deeplx", &source_lang, &target_lang, text);
        result.translation = Some(decode_translation(&payload)?);
        result.alternative = decode_alternative(&payload);
        Ok(result)
    }
}

fn decode_translation(payload: &Value) -> Result<String> {
    payload
        .get("data")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            let message = match payload.get("message").and_then(Value::as_str) {
                Some(msg) => format!("provider error: {msg}"),
                None => "missing data field".to_string(),
            };
            TranslationError::decode("deeplx", message)
        })
}

/// Alternatives stay absent when the provider sends none
fn decode_alternative(payload: &Value) -> Option<Vec<String>> {
    let alternatives = payload.get("alternatives")?.as_array()?;
    if alternatives.is_empty() {
        return None;
    }
    Some(
        alternatives
            .iter()
            .filter_map(Value::as_str)
            .map(|alt| format!("- {alt}"))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DeeplxEngine {
        DeeplxEngine::new(EngineSettings::from_pairs(
            "deeplx",
            &[("url", "http://127.0.0.1:1188/translate")],
        ))
        .unwrap()
    }

    #[test]
    fn test_construction_fails_without_url() {
        let err = DeeplxEngine::new(EngineSettings::from_pairs("deeplx", &[])).unwrap_err();
        assert!(matches!(err, TranslationError::Config { .. }));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_language_remapping() {
        assert_eq!(provider_source("zh-CN"), "ZH");
        assert_eq!(provider_source("zh-CHT"), "ZH");
        assert_eq!(provider_target("zh-CHS"), "ZH-HANS");
        assert_eq!(provider_target("zh-CHT"), "ZH-HANT");
        assert_eq!(provider_target("en"), "EN");
        assert_eq!(provider_target("ja"), "ja");
        let _ = engine();
    }

    #[test]
    fn test_request_headers_carry_only_the_bearer_token() {
        assert!(engine().request_headers().is_empty());

        let with_key = DeeplxEngine::new(EngineSettings::from_pairs(
            "deeplx",
            &[("url", "http://127.0.0.1:1188/translate"), ("apikey", "k")],
        ))
        .unwrap();
        assert_eq!(
            with_key.request_headers(),
            vec![("Authorization", "Bearer k".to_string())]
        );
    }

    #[test]
    fn test_translation_from_data_field() {
        let payload = json!({"code": 200, "data": "翻译这一行"});
        assert_eq!(decode_translation(&payload).unwrap(), "翻译这一行");
    }

    #[test]
    fn test_missing_data_is_a_decode_error() {
        let payload = json!({"code": 429, "message": "Too Many Requests"});
        let err = decode_translation(&payload).unwrap_err();
        assert!(err.to_string().contains("Too Many Requests"));
    }

    #[test]
    fn test_alternatives_absent_when_empty() {
        assert_eq!(decode_alternative(&json!({"data": "x"})), None);
        assert_eq!(
            decode_alternative(&json!({"data": "x", "alternatives": []})),
            None
        );
        assert_eq!(
            decode_alternative(&json!({"alternatives": ["甲", "乙"]})),
            Some(vec!["- 甲".to_string(), "- 乙".to_string()])
        );
    }
}
