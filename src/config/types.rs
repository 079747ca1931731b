//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

/// Studio configuration, read from `~/.design-studio/config.json`.
///
/// Every field is optional; the `get_*` accessors resolve defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the design system definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systems_dir: Option<String>,
    /// Identifiers of the design systems to load, in selector order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systems: Option<Vec<String>>,
    /// System selected at startup (default: the first one that loads)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_system: Option<String>,
    /// Directory export archives are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    /// Class name for restricted tokens in gallery views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_class: Option<String>,
}

impl Config {
    /// Returns the systems directory, tilde-expanded
    pub fn get_systems_dir(&self) -> PathBuf {
        let dir = self.systems_dir.as_deref().unwrap_or(DEFAULT_SYSTEMS_DIR);
        PathBuf::from(shellexpand::tilde(dir).as_ref())
    }

    /// Returns the configured system identifiers, or DEFAULT_SYSTEM_IDS
    pub fn get_system_ids(&self) -> Vec<String> {
        match &self.systems {
            Some(ids) => ids.clone(),
            None => DEFAULT_SYSTEM_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn get_default_system(&self) -> Option<&str> {
        self.default_system.as_deref()
    }

    /// Returns the export directory, tilde-expanded
    pub fn get_export_dir(&self) -> PathBuf {
        let dir = self.export_dir.as_deref().unwrap_or(DEFAULT_EXPORT_DIR);
        PathBuf::from(shellexpand::tilde(dir).as_ref())
    }

    pub fn get_restriction_class(&self) -> &str {
        self.restriction_class
            .as_deref()
            .unwrap_or(DEFAULT_RESTRICTION_CLASS)
    }
}
