//! Global clubcal configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ClubcalError, ClubcalResult};

static DEFAULT_DATA_FILE: &str = "~/clubcal/events.json";
static DEFAULT_ADMIN_CODE: &str = "220504";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

fn default_admin_code() -> String {
    DEFAULT_ADMIN_CODE.to_string()
}

fn is_default_admin_code(c: &String) -> bool {
    c == DEFAULT_ADMIN_CODE
}

/// Global configuration at ~/.config/clubcal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct ClubcalConfig {
    /// Path to the events JSON file (the whole database).
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,

    /// Shared passcode gating the admin surface of the HTTP server.
    #[serde(default = "default_admin_code", skip_serializing_if = "is_default_admin_code")]
    pub admin_code: String,
}

impl ClubcalConfig {
    pub fn config_path() -> ClubcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClubcalError::Config("Could not determine config directory".into()))?
            .join("clubcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/clubcal/config.toml
    pub fn save(&self) -> ClubcalResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| ClubcalError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| ClubcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> ClubcalResult<()> {
        let contents = format!(
            "\
# clubcal configuration

# Where your events database lives:
# data_file = \"{}\"

# Passcode for admin mode:
# admin_code = \"{}\"
",
            DEFAULT_DATA_FILE, DEFAULT_ADMIN_CODE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClubcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClubcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
