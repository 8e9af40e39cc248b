//! File locations and JSON loading.
//!
//! Only configuration is read from disk. Scores live in memory for the
//! lifetime of the process.

use crate::core::constants::{APP_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME};
use crate::core::error::AppError;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn project_dirs() -> io::Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })
}

/// Default location of `config.json`. The file itself may not exist.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Location of the log file, creating its directory if needed.
pub fn log_path() -> io::Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join(LOG_FILE_NAME))
}

/// Read and parse a JSON file. `Ok(None)` if the file does not exist; a file
/// that exists but does not parse is an error.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
