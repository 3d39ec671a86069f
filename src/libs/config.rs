//! Configuration management.
//!
//! Taskpad keeps a single JSON configuration file in the platform application
//! data directory. The only setting today is an optional override for the
//! SQLite database file location; everything else uses built-in defaults.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//!
//! // Run the interactive setup and persist the result
//! Config::init()?.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Custom location of the SQLite database file.
    pub path: Option<PathBuf>,
}

/// Application configuration root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the configuration to disk as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        serde_json::to_writer_pretty(File::create(path)?, self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Prompts for a database file path; an empty answer keeps the default
    /// platform location.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let default_path = current.db_path().map(|p| p.display().to_string()).unwrap_or_default();

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(default_path)
            .allow_empty(true)
            .interact_text()?;

        let database = match input.trim() {
            "" => None,
            path => Some(DatabaseConfig {
                path: Some(PathBuf::from(path)),
            }),
        };

        Ok(Config { database })
    }

    /// The configured database file location, if any.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.database.as_ref().and_then(|db| db.path.clone())
    }
}
