//! Bing dictionary lookup. A free web endpoint that only handles
//! single words and returns an HTML fragment; languages are always
//! auto-detected by the provider, so the resolver is skipped.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::client::HttpClient;
use crate::core::config::EngineSettings;
use crate::core::errors::Result;
use crate::core::models::TranslationResult;
use crate::engines::Engine;

const LOOKUP_URL: &str = "http://cn.bing.com/dict/SerpHoverTrans";

const BROWSER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";

fn phonetic_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<span class="ht_attr" lang=".*?">\[(.*?)\] </span>"#).unwrap()
    })
}

fn explain_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<span class="ht_pos">(.*?)</span><span class="ht_trs">(.*?)</span>"#).unwrap()
    })
}

/// Bing dictionary engine
#[derive(Debug)]
pub struct BingDictEngine {
    client: HttpClient,
}

impl BingDictEngine {
    /// Create the engine; no credentials needed
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let client = HttpClient::from_settings(&settings, Some(BROWSER_AGENT))?;
        Ok(Self { client })
    }
}

impl Engine for BingDictEngine {
    fn name(&self) -> &'static str {
        "bing"
    }

    fn translate(&self, _source: &str, _target: &str, text: &str) -> Result<TranslationResult> {
        let headers = [
            (
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
            ("Accept-Language", "en-US,en;q=0.5"),
        ];
        let html = self.client.get(LOOKUP_URL, &[("q", text)], &headers)?;

        // Language parameters are ignored by this endpoint.
        let mut result = TranslationResult::new("bing", "auto", "auto", text);
        result.phonetic = decode_phonetic(&html);
        result.explain = Some(decode_explain(&html));
        Ok(result)
    }
}

/// First bracketed phonetic transcription in the fragment, if any
fn decode_phonetic(html: &str) -> Option<String> {
    phonetic_pattern()
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
}

/// Repeating (part-of-speech, translation) pairs, one line each
fn decode_explain(html: &str) -> Vec<String> {
    explain_pattern()
        .captures_iter(html)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = concat!(
        r#"<span class="ht_word">kiss</span>"#,
        r#"<span class="ht_attr" lang="en">[kɪs] </span>"#,
        r#"<span class="ht_pos">v.</span><span class="ht_trs">亲吻；接吻</span>"#,
        r#"<span class="ht_pos">n.</span><span class="ht_trs">吻</span>"#,
    );

    #[test]
    fn test_phonetic_extraction() {
        assert_eq!(decode_phonetic(FRAGMENT), Some("kɪs".to_string()));
    }

    #[test]
    fn test_explain_extraction() {
        assert_eq!(
            decode_explain(FRAGMENT),
            vec!["v. 亲吻；接吻".to_string(), "n. 吻".to_string()]
        );
    }

    #[test]
    fn test_missing_phonetic_leaves_explain_intact() {
        let fragment =
            r#"<span class="ht_pos">n.</span><span class="ht_trs">吻</span>"#;
        assert_eq!(decode_phonetic(fragment), None);
        assert_eq!(decode_explain(fragment), vec!["n. 吻".to_string()]);
    }

    #[test]
    fn test_unrelated_html_yields_nothing() {
        let fragment = "<html><body>No results.</body></html>";
        assert_eq!(decode_phonetic(fragment), None);
        assert!(decode_explain(fragment).is_empty());
    }
}
