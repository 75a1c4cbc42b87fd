//! Application settings.
//!
//! Stored as pretty-printed JSON in `config.json` inside the per-user data
//! directory ([`DataStorage`]). A missing file yields the defaults, so the
//! application runs without any setup.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file. Relative paths resolve against the working directory.
    pub db_file: PathBuf,

    /// Ask before deleting from the non-interactive commands.
    pub confirm_deletes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_file: PathBuf::from(DB_FILE_NAME),
            confirm_deletes: true,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The database file to open: `override_path` wins over the setting.
    pub fn db_path(&self, override_path: Option<PathBuf>) -> PathBuf {
        override_path.unwrap_or_else(|| self.db_file.clone())
    }
}
