//! Azure (Microsoft) translator API v3, authenticated with a
//! subscription key header.

use serde_json::{json, Value};

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::Engine;

const TRANSLATE_URL: &str = "https://api.cognitive.microsofttranslator.com/translate";
const API_VERSION: &str = "3.0";

/// Azure translation engine; requires an `apikey` setting
#[derive(Debug)]
pub struct AzureEngine {
    apikey: String,
    client: HttpClient,
}

impl AzureEngine {
    /// Create the engine; fails without a subscription key
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let apikey = settings.require("apikey")?;
        let client = HttpClient::from_settings(&settings, None)?;
        Ok(Self { apikey, client })
    }

    /// Authentication and trace headers; the JSON body supplies the
    /// content type on its own
    fn request_headers<'a>(&'a self, trace_id: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("Ocp-Apim-Subscription-Key", self.apikey.as_str()),
            ("X-ClientTraceId", trace_id),
        ]
    }
}

impl Engine for AzureEngine {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let query = [
            ("api-version", API_VERSION),
            ("from", source_lang.as_str()),
            ("to", target_lang.as_str()),
        ];
        let trace_id = uuid::Uuid::new_v4().to_string();
        let headers = self.request_headers(&trace_id);
        let request_body = json!([{ "text": text }]);
        let body = self
            .client
            .post_json(TRANSLATE_URL, &query, &request_body, &headers)?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("azure", e.to_string()))?;

        let mut result = TranslationResult::new("azure", &source_lang, &target_lang, text);
        result.translation = Some(decode_translation(&payload)?);
        Ok(result)
    }
}

/// Join the translations of the first (only) input element
fn decode_translation(payload: &Value) -> Result<String> {
    let items = payload.as_array().ok_or_else(|| {
        let message = match payload
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            Some(msg) => format!("provider error: {msg}"),
            None => "payload is not an array".to_string(),
        };
        TranslationError::decode("azure", message)
    })?;

    let mut output = String::new();
    if let Some(translations) = items
        .first()
        .and_then(|item| item.get("translations"))
        .and_then(Value::as_array)
    {
        for item in translations {
            if let Some(text) = item.get("text").and_then(Value::as_str) {
                output.push_str(text);
                output.push('\n');
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_fails_without_apikey() {
        let err = AzureEngine::new(EngineSettings::from_pairs("azure", &[])).unwrap_err();
        assert!(matches!(err, TranslationError::Config { .. }));
        assert!(err.to_string().contains("apikey"));
    }

    #[test]
    fn test_request_headers_leave_content_type_to_the_body() {
        let engine =
            AzureEngine::new(EngineSettings::from_pairs("azure", &[("apikey", "k")])).unwrap();
        let headers = engine.request_headers("trace-id");
        assert_eq!(
            headers,
            vec![
                ("Ocp-Apim-Subscription-Key", "k"),
                ("X-ClientTraceId", "trace-id"),
            ]
        );
        assert!(!headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type")));
    }

    #[test]
    fn test_translation_joins_items_with_newlines() {
        let payload = json!([{
            "detectedLanguage": {"language": "zh-Hans", "score": 1.0},
            "translations": [
                {"text": "ご飯を食べましたか?", "to": "ja"}
            ]
        }]);
        assert_eq!(
            decode_translation(&payload).unwrap(),
            "ご飯を食べましたか?\n"
        );
    }

    #[test]
    fn test_empty_payload_yields_empty_translation() {
        assert_eq!(decode_translation(&json!([])).unwrap(), "");
    }

    #[test]
    fn test_provider_error_becomes_decode_error() {
        let payload = json!({
            "error": {"code": 401000, "message": "The request is not authorized."}
        });
        let err = decode_translation(&payload).unwrap_err();
        assert!(err.to_string().contains("not authorized"));
    }
}
