//! Application configuration, stored as TOML next to the user's other
//! app data. A missing file gets the defaults written back; an unreadable
//! file falls back to defaults with a warning. Nothing here is fatal.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Refresh cadence of the countdown view, in seconds.
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
    /// Quiet period before an edited note is committed.
    #[serde(default = "default_note_debounce_ms")]
    pub note_debounce_ms: u64,
    /// Register the executable to launch at user logon.
    #[serde(default = "default_register_autostart")]
    pub register_autostart: bool,
    /// Override for the data directory; platform default when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_seconds: default_tick_seconds(),
            note_debounce_ms: default_note_debounce_ms(),
            register_autostart: default_register_autostart(),
            data_dir: None,
        }
    }
}

fn default_tick_seconds() -> u64 {
    1
}

fn default_note_debounce_ms() -> u64 {
    1500
}

fn default_register_autostart() -> bool {
    true
}

impl Settings {
    /// Load the config file, falling back to defaults on any failure. A
    /// missing file is created with the defaults so users have something
    /// to edit.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::read(path) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("failed to load settings: {err:#}, using defaults");
                    Self::default()
                }
            }
        } else {
            let settings = Self::default();
            if let Err(err) = settings.save(path) {
                log::warn!("failed to write default settings: {err:#}");
            }
            settings
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = toml::from_str(&contents)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }

    pub fn note_debounce(&self) -> Duration {
        Duration::from_millis(self.note_debounce_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.tick_seconds.max(1))
    }
}
