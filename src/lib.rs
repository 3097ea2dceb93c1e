//! Command-line translator backed by multiple translation web services.
//!
//! Each supported provider is wrapped in an [`engines::Engine`]
//! implementation that resolves languages, builds and signs the
//! provider request, performs one blocking HTTP call and normalizes
//! the response into a common [`TranslationResult`].
//!
//! When both languages are left unset, the source/target guess is a
//! deliberate approximation: ASCII-only text is treated as English to
//! be translated to Chinese, everything else as the reverse. See
//! [`core::lang::guess_language`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod engines;

// Re-export key types for convenience
pub use crate::core::{
    config::EngineSettings,
    errors::{Result, TranslationError},
    models::{TranslationRequest, TranslationResult},
};
pub use crate::engines::{create_engine, Engine, ENGINE_NAMES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
