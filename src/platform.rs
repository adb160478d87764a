//! Hosts file location per platform.

use std::path::PathBuf;

use thiserror::Error;

/// Environment override for the hosts file path (e.g. in tests).
pub const HOSTS_FILE_ENV: &str = "HOSTS_FILE";

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("unsupported platform: no known hosts file location")]
    Unsupported,
}

/// Absolute path to the system hosts file.
///
/// If HOSTS_FILE is set (e.g. in tests), that path is used instead of the
/// platform default. Platforms outside the unix and windows families have
/// no known location and fail before any file access.
pub fn hosts_file_path() -> Result<PathBuf, PlatformError> {
    if let Some(path) = std::env::var_os(HOSTS_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }
    if cfg!(unix) {
        Ok(PathBuf::from("/etc/hosts"))
    } else if cfg!(windows) {
        Ok(PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts"))
    } else {
        Err(PlatformError::Unsupported)
    }
}
