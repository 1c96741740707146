// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{FrontDoorConfig, RawFrontDoorConfig};
use crate::errors::Result;

/// Environment variable consulted by [`default_config_path`].
pub const CONFIG_ENV_VAR: &str = "FRONTDOOR_CONFIG";

/// Load a configuration file from a given path and return the raw
/// `RawFrontDoorConfig`.
///
/// This only performs TOML deserialization; it does **not** perform any
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawFrontDoorConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading configuration");
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Parse a configuration from TOML text.
pub fn load_from_str(contents: &str) -> Result<RawFrontDoorConfig> {
    let config: RawFrontDoorConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde`).
/// - Checks field formats (names, host names).
/// - Checks cross references between sections, stopping at the first
///   inconsistency.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<FrontDoorConfig> {
    let raw_config = load_from_path(&path)?;
    let config = FrontDoorConfig::try_from(raw_config)?;
    Ok(config)
}

/// Config path used when none is given on the command line.
///
/// `FRONTDOOR_CONFIG` if set and non-empty, otherwise `FrontDoor.toml` in
/// the current working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("FrontDoor.toml"),
    }
}
