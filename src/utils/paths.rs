//! Resolution of the persisted document locations.
//!
//! Debug builds keep everything in the working directory; release builds
//! use the platform app-data directories, falling back to the working
//! directory when those cannot be determined.

use std::path::PathBuf;

#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

use crate::services::settings::Settings;

/// Where the engine's documents live. The notes document sits in its own
/// `notes/` area, separate from the deadline document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub deadlines: PathBuf,
    pub notes: PathBuf,
}

impl AppPaths {
    pub fn resolve(settings: &Settings) -> Self {
        let base = settings.data_dir.clone().unwrap_or_else(data_dir);
        Self {
            deadlines: base.join("deadlines.json"),
            notes: base.join("notes").join("notes.json"),
        }
    }
}

pub fn data_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(".")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "Ken24T", "ExamCountdown") {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        }
    }
}

pub fn config_file() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("config.toml")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "Ken24T", "ExamCountdown") {
            proj_dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("config.toml")
        }
    }
}
