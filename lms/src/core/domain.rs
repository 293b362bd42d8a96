use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DATA_FILE_ENV: &str = "LMS_DATA_FILE";
pub const LOG_LEVEL_ENV: &str = "LMS_LOG_LEVEL";
pub const DEFAULT_DATA_FILE: &str = "data.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub log_level: String,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            log_level: "info".to_string(),
        }
    }

    // reads LMS_DATA_FILE and LMS_LOG_LEVEL, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Configuration::new(
            std::env::var(DATA_FILE_ENV).unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()).as_str());
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_DATA_FILE)
    }
}
