use crate::error::{Result, SnipzError};
use crate::model::ALL_LANGUAGES;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_DEFAULT_LANGUAGE: &str = "default-language";

/// Configuration for snipz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Snippet data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Language filter applied by `list` when none is given
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_language() -> String {
    ALL_LANGUAGES.to_string()
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_language: default_language(),
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SnipzError::Io)?;
        let config: SnipzConfig =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SnipzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SnipzError::Serialization)?;
        fs::write(config_path, content).map_err(SnipzError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_DATA_FILE, KEY_DEFAULT_LANGUAGE]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.clone()),
            KEY_DEFAULT_LANGUAGE => Some(self.default_language.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("Value for {} cannot be empty", key));
        }
        match key {
            KEY_DATA_FILE => self.data_file = value.to_string(),
            KEY_DEFAULT_LANGUAGE => self.default_language = value.to_lowercase(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
