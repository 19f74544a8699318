//! JSON settings record.
//!
//! A single flat object, overwritten on every save:
//!
//! ```json
//! { "worktime": 1500, "breaktime": 300, "longtime": 900, "pomodoros": 12 }
//! ```
//!
//! Durations are seconds, `pomodoros` is the cumulative count. The file is
//! opened, used and closed within each call; nothing holds it open.
//!
//! A record that loads successfully turns the persist flag on, whether or not
//! the user had switched it off before the record was written. Switching it
//! off for a run removes the record at shutdown, so the next run starts from
//! defaults with the flag off again.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::config::Configuration;
use crate::error::{Result, SettingsError, ValidationError};

pub const SETTINGS_FILE_NAME: &str = "pomodoro.settings";

/// On-disk layout. Missing keys take defaults; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    #[serde(default = "default_worktime")]
    pub worktime: u64,
    #[serde(default = "default_breaktime")]
    pub breaktime: u64,
    #[serde(default = "default_longtime")]
    pub longtime: u64,
    #[serde(default)]
    pub pomodoros: u64,
}

fn default_worktime() -> u64 {
    Configuration::default().work_secs
}
fn default_breaktime() -> u64 {
    Configuration::default().break_secs
}
fn default_longtime() -> u64 {
    Configuration::default().long_break_secs
}

impl From<&Configuration> for SettingsRecord {
    fn from(cfg: &Configuration) -> Self {
        Self {
            worktime: cfg.work_secs,
            breaktime: cfg.break_secs,
            longtime: cfg.long_break_secs,
            pomodoros: cfg.total_pomodoros,
        }
    }
}

impl SettingsRecord {
    /// Convert a loaded record into a configuration with `persist` set.
    /// Zero durations fall back to the defaults.
    pub fn into_config(self) -> Configuration {
        Configuration {
            work_secs: self.worktime,
            break_secs: self.breaktime,
            long_break_secs: self.longtime,
            total_pomodoros: self.pomodoros,
            persist: true,
        }
        .with_positive_durations()
    }
}

/// What shutdown persistence did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    Cleared,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/pomodoro.settings`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> std::io::Result<Self> {
        Ok(Self::new(data_dir()?.join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the record.
    ///
    /// # Errors
    /// `FileNotFound` when there is no record, `Parse` when it is not a
    /// well-formed settings object, `Io` for any other read failure.
    pub fn load(&self) -> Result<Configuration, SettingsError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SettingsError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                SettingsError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let record: SettingsRecord =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.into_config())
    }

    /// Load from disk, returning defaults on any error.
    /// This is a convenience method that never fails.
    pub fn load_or_default(&self) -> Configuration {
        match self.load() {
            Ok(cfg) => {
                tracing::debug!(path = %self.path.display(), "loaded settings");
                cfg
            }
            Err(SettingsError::FileNotFound { path }) => {
                tracing::debug!(path = %path.display(), "no settings file; using defaults");
                Configuration::default()
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Configuration::default()
            }
        }
    }

    /// Overwrite the record with `cfg`.
    ///
    /// # Errors
    /// Returns an error if the record cannot be serialized or written.
    pub fn save(&self, cfg: &Configuration) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&SettingsRecord::from(cfg))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        std::fs::write(&self.path, content).map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// Remove the record. A missing record is not an error.
    ///
    /// # Errors
    /// Returns an error if an existing record cannot be removed.
    pub fn clear(&self) -> Result<(), SettingsError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared settings");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Load, apply `edit`, save. Nothing is written when the edit is rejected.
    ///
    /// # Errors
    /// Returns the edit's validation error, or the save error.
    pub fn update<F>(&self, edit: F) -> Result<Configuration>
    where
        F: FnOnce(&mut Configuration) -> Result<(), ValidationError>,
    {
        let mut cfg = self.load_or_default();
        edit(&mut cfg)?;
        self.save(&cfg)?;
        Ok(cfg)
    }

    /// Save when `cfg.persist` is set, clear otherwise.
    ///
    /// # Errors
    /// Propagates the error of the chosen operation.
    pub fn persist_on_shutdown(&self, cfg: &Configuration) -> Result<PersistOutcome, SettingsError> {
        if cfg.persist {
            self.save(cfg)?;
            Ok(PersistOutcome::Saved)
        } else {
            self.clear()?;
            Ok(PersistOutcome::Cleared)
        }
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
