use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Each entry serializes as { value, description }.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPathConfigItem {
    pub value: PathBuf,
    pub description: String,
}

impl Default for DataPathConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from("data.csv"),
            description: "Roster file used by Save/Load unless --data is given".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: true,
            description: "Write log messages to the session log file".to_string(),
        }
    }
}
