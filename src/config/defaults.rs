//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.design-studio/config.json";

/// Directory holding one `{id}.json` definition per design system
pub const DEFAULT_SYSTEMS_DIR: &str = "design-systems";

/// Design systems fetched at startup, in selector order
pub const DEFAULT_SYSTEM_IDS: &[&str] = &["material", "apple", "github", "pliability"];

/// Where export archives are written
pub const DEFAULT_EXPORT_DIR: &str = ".";

/// Class attached to views of tokens outside the allow-list
pub const DEFAULT_RESTRICTION_CLASS: &str = "token-restricted";
