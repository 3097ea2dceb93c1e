//! Translation engines: one adapter per provider plus the registry.
//!
//! Every adapter implements [`Engine`]: resolve languages, build and
//! optionally sign the provider request, dispatch it over the blocking
//! HTTP client and decode the raw payload into a
//! [`TranslationResult`](crate::core::models::TranslationResult).

pub mod azure;
pub mod baidu;
pub mod bingdict;
pub mod ciba;
pub mod deeplx;
pub mod google;
pub mod sign;
pub mod youdao;

use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationResult;

/// Common capability every provider adapter satisfies.
///
/// A `translate` call is stateless and fully synchronous; an engine
/// keeps nothing between calls beyond its immutable settings and its
/// HTTP client handle.
pub trait Engine {
    /// Registry name of the engine
    fn name(&self) -> &'static str;

    /// Translate `text`, resolving unset languages first
    fn translate(&self, source: &str, target: &str, text: &str) -> Result<TranslationResult>;
}

/// Names accepted by [`create_engine`], in the order shown to users
pub const ENGINE_NAMES: &[&str] = &[
    "google", "youdao", "baidu", "azure", "bing", "ciba", "deeplx",
];

/// Instantiate an engine by name.
///
/// Engines that require credentials fail here, before any network
/// call, when the settings lack them.
pub fn create_engine(name: &str, settings: EngineSettings) -> Result<Box<dyn Engine>> {
    match name {
        "google" => Ok(Box::new(google::GoogleEngine::new(settings)?)),
        "youdao" => Ok(Box::new(youdao::YoudaoEngine::new(settings)?)),
        "baidu" => Ok(Box::new(baidu::BaiduEngine::new(settings)?)),
        "azure" => Ok(Box::new(azure::AzureEngine::new(settings)?)),
        "bing" => Ok(Box::new(bingdict::BingDictEngine::new(settings)?)),
        "ciba" => Ok(Box::new(ciba::CibaEngine::new(settings)?)),
        "deeplx" => Ok(Box::new(deeplx::DeeplxEngine::new(settings)?)),
        other => Err(TranslationError::config(
            other,
            format!("unknown engine, expected one of: {}", ENGINE_NAMES.join(", ")),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_engine_is_rejected() {
        // `Box<dyn Engine>` has no Debug, so take the error side directly
        let err = match create_engine("altavista", EngineSettings::from_pairs("altavista", &[])) {
            Ok(_) => panic!("unknown engine must be rejected"),
            Err(err) => err,
        };
        assert!(matches!(err, TranslationError::Config { .. }));
        assert!(err.to_string().contains("unknown engine"));
    }

    #[test]
    fn test_keyless_engines_construct_without_settings() {
        for name in ["google", "youdao", "bing", "ciba"] {
            let engine = create_engine(name, EngineSettings::from_pairs(name, &[])).unwrap();
            assert_eq!(engine.name(), name);
        }
    }
}
