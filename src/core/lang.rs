//! Language name aliases and the source/target guessing heuristic

use std::collections::HashMap;
use std::sync::OnceLock;

/// Human language name -> canonical code, as the providers expect them
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("arabic", "ar"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("chinese", "zh-CN"),
    ("chinese simplified", "zh-CHS"),
    ("chinese traditional", "zh-CHT"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("estonian", "et"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("german", "de"),
    ("greek", "el"),
    ("haitian creole", "ht"),
    ("hebrew", "he"),
    ("hindi", "hi"),
    ("hmong daw", "mww"),
    ("hungarian", "hu"),
    ("indonesian", "id"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("klingon", "tlh"),
    ("klingon (piqad)", "tlh-Qaak"),
    ("korean", "ko"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("malay", "ms"),
    ("maltese", "mt"),
    ("norwegian", "no"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("spanish", "es"),
    ("swedish", "sv"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
];

/// Read-only alias table, built once and never mutated afterwards
fn alias_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| LANGUAGE_ALIASES.iter().copied().collect())
}

/// True when every character is plain ASCII (code point < 128)
pub fn is_ascii_text(text: &str) -> bool {
    text.chars().all(|c| (c as u32) < 128)
}

/// Replace a full language name with its canonical code, case-insensitively.
/// Anything not in the alias table passes through unchanged.
pub fn resolve_alias(lang: &str) -> String {
    match alias_table().get(lang.to_lowercase().as_str()) {
        Some(code) => (*code).to_string(),
        None => lang.to_string(),
    }
}

/// Resolve source and target languages before they reach a provider.
///
/// When both are unset or `"auto"`, ASCII-only text is assumed to be
/// English translated to Chinese, everything else the reverse. This is
/// a coarse heuristic, not language detection; it treats all non-ASCII
/// input as Chinese and is kept for compatibility.
pub fn guess_language(source: &str, target: &str, text: &str) -> (String, String) {
    let unset = |lang: &str| lang.is_empty() || lang == "auto";
    let (mut source, mut target) = (source.to_string(), target.to_string());
    if unset(&source) && unset(&target) {
        if is_ascii_text(text) {
            source = "en".to_string();
            target = "zh-CN".to_string();
        } else {
            source = "zh-CN".to_string();
            target = "en".to_string();
        }
    }
    (resolve_alias(&source), resolve_alias(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_text_guesses_english_to_chinese() {
        assert_eq!(
            guess_language("auto", "auto", "long"),
            ("en".to_string(), "zh-CN".to_string())
        );
        assert_eq!(
            guess_language("", "", "hello world"),
            ("en".to_string(), "zh-CN".to_string())
        );
    }

    #[test]
    fn test_non_ascii_text_guesses_chinese_to_english() {
        assert_eq!(
            guess_language("auto", "auto", "长"),
            ("zh-CN".to_string(), "en".to_string())
        );
        // one non-ASCII character is enough
        assert_eq!(
            guess_language("", "", "test 翻译"),
            ("zh-CN".to_string(), "en".to_string())
        );
    }

    #[test]
    fn test_explicit_languages_are_kept() {
        assert_eq!(
            guess_language("fr", "de", "bonjour"),
            ("fr".to_string(), "de".to_string())
        );
    }

    #[test]
    fn test_alias_resolution_is_case_insensitive() {
        assert_eq!(resolve_alias("japanese"), "ja");
        assert_eq!(resolve_alias("Japanese"), "ja");
        assert_eq!(resolve_alias("CHINESE SIMPLIFIED"), "zh-CHS");
        assert_eq!(resolve_alias("Klingon (piqad)"), "tlh-Qaak");
    }

    #[test]
    fn test_unknown_language_passes_through() {
        assert_eq!(resolve_alias("zh-CN"), "zh-CN");
        assert_eq!(resolve_alias("xx"), "xx");
    }

    #[test]
    fn test_alias_applies_even_when_one_side_is_auto() {
        let (sl, tl) = guess_language("english", "Japanese", "hello");
        assert_eq!((sl.as_str(), tl.as_str()), ("en", "ja"));
    }
}
