//! Configuration module - Studio settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.design-studio/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definition
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_RESTRICTION_CLASS, DEFAULT_SYSTEM_IDS};
pub use loader::{load_config, load_config_from, try_load_config};
pub use types::Config;

#[cfg(test)]
pub use defaults::{DEFAULT_EXPORT_DIR, DEFAULT_SYSTEMS_DIR};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
