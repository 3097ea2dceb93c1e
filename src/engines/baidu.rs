//! Baidu open translation API, authenticated per request with a
//! salted MD5 signature over the user's app id and secret.

use serde_json::Value;

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::guess_language;
use crate::core::models::TranslationResult;
use crate::engines::sign::{md5_hex, request_salt};
use crate::engines::Engine;

const TRANSLATE_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Canonical code -> Baidu's own language vocabulary
const PROVIDER_CODES: &[(&str, &str)] = &[
    ("zh-cn", "zh"),
    ("zh-chs", "zh"),
    ("zh-cht", "cht"),
    ("en-us", "en"),
    ("en-gb", "en"),
    ("ja", "jp"),
];

/// Baidu translation engine; requires `apikey` and `secret` settings
#[derive(Debug)]
pub struct BaiduEngine {
    apikey: String,
    secret: String,
    client: HttpClient,
}

fn provider_code(lang: &str) -> String {
    let lower = lang.to_lowercase();
    for (canonical, provider) in PROVIDER_CODES {
        if lower == *canonical {
            return (*provider).to_string();
        }
    }
    lang.to_string()
}

impl BaiduEngine {
    /// Create the engine; fails without credentials, before any request
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let apikey = settings.require("apikey")?;
        let secret = settings.require("secret")?;
        let client = HttpClient::from_settings(&settings, None)?;
        Ok(Self {
            apikey,
            secret,
            client,
        })
    }

    /// `md5(appid + text + salt + secret)`, lowercase hex
    fn sign_request(&self, text: &str, salt: &str) -> String {
        md5_hex(&format!("{}{}{}{}", self.apikey, text, salt, self.secret))
    }
}

impl Engine for BaiduEngine {
    fn name(&self) -> &'static str {
        "baidu"
    }

    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult> {
        let (source_lang, target_lang) = guess_language(source, target, text);
        let from = provider_code(&source_lang);
        let to = provider_code(&target_lang);
        let salt = request_salt();
        let sign = self.sign_request(text, &salt);
        let form = [
            ("q", text),
            ("from", from.as_str()),
            ("to", to.as_str()),
            ("appid", self.apikey.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];
        let body = self.client.post_form(TRANSLATE_URL, &form, &[])?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::decode("baidu", e.to_string()))?;

        let mut result = TranslationResult::new("baidu", &source_lang, &target_lang, text);
        result.translation = Some(decode_translation(&payload)?);
        Ok(result)
    }
}

/// Render `trans_result` rows as source/target line pairs
fn decode_translation(payload: &Value) -> Result<String> {
    let rows = payload
        .get("trans_result")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            let message = match payload.get("error_msg").and_then(Value::as_str) {
                Some(msg) => format!("provider error: {msg}"),
                None => "missing trans_result".to_string(),
            };
            TranslationError::decode("baidu", message)
        })?;

    let mut output = String::new();
    for row in rows {
        let src = row.get("src").and_then(Value::as_str).unwrap_or("");
        let dst = row.get("dst").and_then(Value::as_str).unwrap_or("");
        output.push_str(src);
        output.push('\n');
        output.push_str(" * ");
        output.push_str(dst);
        output.push('\n');
    }
    Ok(output)
}
