use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Largest depth `ConvertTo-Json` accepts.
pub const MAX_JSON_DEPTH: u32 = 100;

/// Root configuration structure for config.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_command")]
    pub command: CommandDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

/// How built command lines serialize their output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefaults {
    /// `-Depth` passed to `ConvertTo-Json`; omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_depth: Option<u32>,

    #[serde(default = "default_compress_json")]
    pub compress_json: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_command() -> CommandDefaults {
    CommandDefaults {
        json_depth: None,
        compress_json: default_compress_json(),
    }
}

fn default_compress_json() -> bool {
    true
}

// =============================================================================
// Loading
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If config.json is missing or invalid, returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full config.json, falling back to defaults on any error.
pub fn load_config() -> Config {
    let path = match paths::config_json() {
        Ok(path) => path,
        Err(_) => return Config::default(),
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log_status!(
                "config",
                "Ignoring {}: {} ({})",
                path.display(),
                err.message,
                err.details
            );
            Config::default()
        }
    }
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> crate::Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: Config = serde_json::from_str(&content).map_err(|e| {
        crate::Error::validation_invalid_json(e, Some(format!("parse {}", path.display())))
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> crate::Result<()> {
    if let Some(depth) = config.defaults.command.json_depth {
        if depth == 0 || depth > MAX_JSON_DEPTH {
            return Err(crate::Error::config_invalid_value(
                "defaults.command.json_depth",
                Some(depth.to_string()),
                format!("must be between 1 and {}", MAX_JSON_DEPTH),
            ));
        }
    }
    Ok(())
}

/// Check if config.json exists
pub fn config_exists() -> bool {
    paths::config_json().map(|p| p.exists()).unwrap_or(false)
}

/// Get the path to config.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::config_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
