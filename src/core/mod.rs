//! Core functionality: models, settings, language handling, HTTP and errors

pub mod client;
pub mod config;
pub mod errors;
pub mod lang;
pub mod models;
