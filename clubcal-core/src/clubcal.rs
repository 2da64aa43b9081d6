//! Clubcal root handle: configuration plus access to the event store.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::ClubcalConfig;
use crate::error::{ClubcalError, ClubcalResult};
use crate::store::EventStore;

#[derive(Clone)]
pub struct Clubcal {
    config: ClubcalConfig,
}

impl Clubcal {
    pub fn load() -> ClubcalResult<Self> {
        let config_path = ClubcalConfig::config_path()?;

        if !config_path.exists() {
            ClubcalConfig::create_default_config(&config_path)?;
        }

        let config: ClubcalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| ClubcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClubcalError::Config(e.to_string()))?;

        Ok(Clubcal { config })
    }

    /// Path to the events JSON file, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data file path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_file.clone()
    }

    pub fn store(&self) -> EventStore {
        EventStore::new(self.data_path())
    }

    pub fn admin_code(&self) -> &str {
        &self.config.admin_code
    }

    /// Point the config at a different events file and persist the change.
    pub fn set_data_file(&mut self, path: PathBuf) -> ClubcalResult<()> {
        self.config.data_file = path;
        self.config.save()
    }
}
