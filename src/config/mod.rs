pub mod models;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::models::{DataPathConfigItem, FileLoggingConfigItem};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_path: DataPathConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    data: ConfigFile,
}

impl Config {
    /// Load the optional config file. A missing file yields defaults so the
    /// tool runs with zero setup; invalid JSON is a startup error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { data })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn data_path(&self) -> &Path {
        &self.data.data_path.value
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.value
    }
}
