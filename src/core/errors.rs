//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Required setting missing or invalid; raised before any network call
    #[error("configuration error for engine `{engine}`: {message}")]
    Config {
        /// Engine the setting belongs to
        engine: String,
        /// What is missing or invalid
        message: String,
    },

    /// Connection failure or timeout from the HTTP client
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider payload did not match the expected shape
    #[error("failed to decode `{engine}` response: {message}")]
    Decode {
        /// Engine whose payload could not be decoded
        engine: String,
        /// What went wrong
        message: String,
    },
}

impl TranslationError {
    /// Build a configuration error for the given engine
    pub fn config(engine: &str, message: impl Into<String>) -> Self {
        TranslationError::Config {
            engine: engine.to_string(),
            message: message.into(),
        }
    }

    /// Build a decode error for the given engine
    pub fn decode(engine: &str, message: impl Into<String>) -> Self {
        TranslationError::Decode {
            engine: engine.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
