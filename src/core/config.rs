//! Engine settings loaded from the user's TOML configuration file.
//!
//! The file lives at `~/.config/translator/config.toml` and holds one
//! `[default]` section plus one section per engine. Keys from the
//! engine section override keys from `[default]`; the merged, flat
//! map is all an engine ever sees.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Flat key -> value settings for one engine, immutable after loading
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    engine: String,
    values: HashMap<String, String>,
}

/// Location of the configuration file unless overridden on the command line
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        Path::new(&home)
            .join(".config")
            .join("translator")
            .join("config.toml")
    })
}

impl EngineSettings {
    /// Load and merge the `[default]` and `[<engine>]` sections.
    ///
    /// A missing file yields empty settings; engines that require keys
    /// reject those at construction. The `all_proxy` environment
    /// variable supplies a proxy when the file does not set one.
    pub fn load(engine: &str, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let mut values = HashMap::new();
        if let Some(path) = path {
            let cfg = Config::builder()
                .add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .build()
                .map_err(|e| TranslationError::config(engine, e.to_string()))?;

            for section in ["default", engine] {
                if let Ok(table) = cfg.get_table(section) {
                    for (key, value) in table {
                        if let Ok(value) = value.into_string() {
                            values.insert(key.to_lowercase(), value);
                        }
                    }
                }
            }
            debug!(engine, path = %path.display(), keys = values.len(), "loaded settings");
        }

        let mut settings = Self {
            engine: engine.to_string(),
            values,
        };
        settings.apply_proxy_env();
        Ok(settings)
    }

    /// Build settings from literal key/value pairs (used by tests)
    pub fn from_pairs(engine: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            engine: engine.to_string(),
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
        }
    }

    fn apply_proxy_env(&mut self) {
        if self.values.contains_key("proxy") {
            return;
        }
        if let Ok(proxy) = std::env::var("all_proxy") {
            let proxy = proxy.trim();
            if !proxy.is_empty() {
                self.values.insert("proxy".to_string(), proxy.to_string());
            }
        }
    }

    /// Engine the settings were loaded for
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Look up an optional setting
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a setting an engine cannot work without
    pub fn require(&self, key: &str) -> Result<String> {
        self.values.get(key).cloned().ok_or_else(|| {
            TranslationError::config(
                &self.engine,
                format!("missing `{}` in [{}] section", key, self.engine),
            )
        })
    }
}
