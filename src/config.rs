//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_QUEUE_CAPACITY, DEFAULT_SLOT_CAPACITY,
    MAX_RECENT_FILES, SESSION_FILE_NAME,
};
use crate::store::LoadPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which widget the window shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Addressable slots with save/load buttons
    #[default]
    Slots,
    /// FIFO queue consumed by clicking the status pill
    Queue,
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir().join(SESSION_FILE_NAME)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Starting directory for file dialogs
    pub fn dialog_dir(&self) -> PathBuf {
        self.settings
            .recent_files
            .first()
            .and_then(|p| p.parent())
            .filter(|dir| dir.is_dir())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.data_dir())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Slot list or FIFO queue
    #[serde(default)]
    pub mode: StoreMode,

    /// Starting capacity of the slot list
    #[serde(default = "default_slot_capacity")]
    pub slot_capacity: usize,

    /// Starting capacity of the queue
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Drop repeated lines when loading a URL file
    #[serde(default)]
    pub dedup_on_load: bool,

    /// Write the pile to the data dir on exit and reload it on start
    #[serde(default)]
    pub restore_session: bool,

    /// Recently loaded or saved URL files, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

fn default_slot_capacity() -> usize {
    DEFAULT_SLOT_CAPACITY
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl Settings {
    pub fn initial_capacity(&self) -> usize {
        match self.mode {
            StoreMode::Slots => self.slot_capacity,
            StoreMode::Queue => self.queue_capacity,
        }
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.dedup_on_load {
            LoadPolicy::Deduplicate
        } else {
            LoadPolicy::KeepDuplicates
        }
    }

    /// Move `path` to the front of the recent list
    pub fn remember_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: StoreMode::default(),
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            dedup_on_load: false,
            restore_session: false,
            recent_files: Vec::new(),
        }
    }
}
