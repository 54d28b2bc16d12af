use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "HYPERV_SHELL_CONFIG";

/// Base config directory (~/.config/hyperv-shell/, %APPDATA%\hyperv-shell on Windows)
pub fn config_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("hyperv-shell"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("hyperv-shell"))
    }
}

/// Config file path, honoring `HYPERV_SHELL_CONFIG` when set.
pub fn config_json() -> Result<PathBuf> {
    match env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            Ok(PathBuf::from(shellexpand::tilde(path.trim()).to_string()))
        }
        _ => Ok(config_dir()?.join("config.json")),
    }
}
