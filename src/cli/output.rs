//! Rendering of a translation result to the terminal.
//!
//! The renderer knows nothing about providers; it only looks at which
//! fields of the common result are present.

use crate::core::models::TranslationResult;

const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Print the result as one JSON object; absent fields are omitted
pub fn print_json(result: &TranslationResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

/// Print the result field by field.
///
/// The phonetic is only shown on request. A present `explain` field
/// takes precedence over `translation`, mirroring how dictionary-style
/// providers are rendered.
pub fn print_plain(result: &TranslationResult, show_phonetic: bool) {
    if !result.text.is_empty() {
        println!("{}", result.text);
    }
    if show_phonetic {
        if let Some(phonetic) = &result.phonetic {
            if !phonetic.is_empty() {
                println!("[{phonetic}]");
            }
        }
    }
    if let Some(definition) = &result.definition {
        if !definition.is_empty() {
            println!("{definition}");
        }
    }
    match (&result.explain, &result.translation) {
        (Some(explain), _) => {
            if !explain.is_empty() {
                println!("{}", explain.join("\n"));
            }
        }
        (None, Some(translation)) => {
            if !translation.is_empty() {
                println!("{translation}");
            }
        }
        (None, None) => {}
    }
    if let Some(alternative) = &result.alternative {
        if !alternative.is_empty() {
            println!("{GREEN}alternative:{RESET}");
            println!("{}", alternative.join("\n"));
        }
    }
}
