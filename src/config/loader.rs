//! Configuration loading from file system

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{DesignStudioError, Result, ResultExt};

/// Load configuration from ~/.design-studio/config.json
///
/// Returns Config::default() if the file is missing or malformed.
pub fn load_config() -> Config {
    let config_path = PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref());
    load_config_from(&config_path)
}

/// Load configuration from an explicit path, falling back to defaults.
///
/// Read and parse failures are logged as warnings.
pub fn load_config_from(path: &Path) -> Config {
    try_load_config(path).warn_on_err().unwrap_or_default()
}

/// Load configuration from `path`, surfacing read and parse failures.
///
/// A missing file is not an error and yields the defaults.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn try_load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("Config file not found, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        DesignStudioError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;

    match serde_json::from_str::<Config>(&contents) {
        Ok(config) => {
            info!("Successfully loaded config");
            Ok(config)
        }
        Err(e) => {
            let hint = if e.to_string().contains("invalid type: string") {
                " (hint: 'systems' must be an array of ids, e.g. \"systems\": [\"material\", \"apple\"])"
            } else {
                ""
            };
            debug!(content = %contents, "Malformed config file content");
            Err(DesignStudioError::Config(format!(
                "{} is not valid: {}{}",
                path.display(),
                e,
                hint
            )))
        }
    }
}
