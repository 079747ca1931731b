//! Design system loading
//!
//! One JSON document per system at `{dir}/{id}.json`. Each document loads
//! independently; a failure is logged and that system is left out.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use super::types::DesignSystem;
use crate::error::{DesignStudioError, Result, ResultExt};

/// Read and parse a single design system document
pub fn load_design_system(path: &Path, id: &str) -> Result<DesignSystem> {
    let content = fs::read_to_string(path).map_err(|source| DesignStudioError::SystemRead {
        id: id.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content)
        .and_then(DesignSystem::from_document)
        .map_err(|source| DesignStudioError::SystemParse {
            id: id.to_string(),
            source,
        })
}

/// Load every configured system from `dir`, in `ids` order, skipping failures
#[instrument(name = "load_design_systems", skip_all, fields(dir = %dir.display(), requested = ids.len()))]
pub fn load_design_systems<S: AsRef<str>>(dir: &Path, ids: &[S]) -> Vec<DesignSystem> {
    let mut systems = Vec::with_capacity(ids.len());
    for id in ids {
        let id: &str = id.as_ref();
        let path = dir.join(format!("{}.json", id));
        debug!(system_id = id, path = %path.display(), "Loading design system");

        let Some(system) = load_design_system(&path, id).log_err() else {
            continue;
        };
        info!(
            event_type = "system_loaded",
            system_id = %system.id,
            name = %system.name,
            restricted = system.allowed_tokens.is_some(),
            "Loaded design system"
        );
        systems.push(system);
    }

    info!(loaded = systems.len(), "Design systems loaded");
    systems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designs::{
        is_token_allowed, AnimatedComponent, ComponentAnimator, InteractionState, SystemStatus,
    };
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r##"{
        "id": "mini",
        "name": "Mini",
        "description": "Smallest valid system",
        "tokens": {
            "colors": {"primary": {"500": "#3366ff"}},
            "typography": {"fontWeight": {"bold": 700}},
            "spacing": {"sm": "8px"}
        }
    }"##;

    #[test]
    fn test_load_single_system() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mini.json");
        fs::write(&path, MINIMAL).unwrap();

        let system = load_design_system(&path, "mini").unwrap();
        assert_eq!(system.name, "Mini");
        assert_eq!(system.tokens.spacing["sm"].to_string(), "8px");
        assert_eq!(
            system.tokens.typography.font_weight.as_ref().unwrap()["bold"].to_string(),
            "700"
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_design_system(&dir.path().join("nope.json"), "nope").unwrap_err();
        assert!(matches!(err, DesignStudioError::SystemRead { .. }));
    }

    #[test]
    fn test_missing_required_category_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(
            &path,
            r#"{"id": "broken", "name": "Broken", "description": "", "tokens": {"spacing": {}}}"#,
        )
        .unwrap();
        let err = load_design_system(&path, "broken").unwrap_err();
        assert!(matches!(err, DesignStudioError::SystemParse { .. }));
    }

    fn write_system(dir: &TempDir, name: &str, document: serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, document.to_string()).unwrap();
        path
    }

    fn minimal_with(patch: impl FnOnce(&mut serde_json::Value)) -> serde_json::Value {
        let mut document: serde_json::Value = serde_json::from_str(MINIMAL).unwrap();
        patch(&mut document);
        document
    }

    #[test]
    fn test_unknown_animation_names_still_load() {
        let dir = TempDir::new().unwrap();
        let path = write_system(
            &dir,
            "wobbly.json",
            minimal_with(|d| {
                d["tokens"]["animations"] = json!({
                    "default": {"hover": {"type": "wobble", "intensity": "extreme"}}
                });
            }),
        );

        let system = load_design_system(&path, "wobbly").unwrap();
        let animator = ComponentAnimator::new(system.tokens.animations.as_ref(), AnimatedComponent::Card);
        assert_eq!(animator.class(InteractionState::Hover), "animation-wobble-extreme");
    }

    #[test]
    fn test_unknown_status_still_loads() {
        let dir = TempDir::new().unwrap();
        let path = write_system(&dir, "beta.json", minimal_with(|d| d["status"] = json!("beta")));

        let system = load_design_system(&path, "beta").unwrap();
        assert_eq!(system.status, Some(SystemStatus::Other("beta".to_string())));
        assert_eq!(system.display_name(), "Mini");
    }

    #[test]
    fn test_non_scalar_leaves_still_load() {
        let dir = TempDir::new().unwrap();
        let path = write_system(
            &dir,
            "odd.json",
            minimal_with(|d| {
                d["tokens"]["spacing"]["none"] = json!(null);
                d["tokens"]["opacity"] = json!({"enabled": true});
            }),
        );

        let system = load_design_system(&path, "odd").unwrap();
        assert_eq!(system.tokens.spacing["none"].to_string(), "null");
        assert_eq!(
            system.tokens.opacity.as_ref().unwrap()["enabled"].to_string(),
            "true"
        );
    }

    #[test]
    fn test_mixed_allow_list_still_loads_and_restricts() {
        let dir = TempDir::new().unwrap();
        let path = write_system(
            &dir,
            "mixed.json",
            minimal_with(|d| d["allowedTokens"] = json!({"spacing": ["sm", 1]})),
        );

        let system = load_design_system(&path, "mixed").unwrap();
        let allowed = system.allowed_tokens.as_ref();
        assert!(is_token_allowed(allowed, "spacing", None, "sm"));
        assert!(!is_token_allowed(allowed, "spacing", None, "lg"));
    }

    #[test]
    fn test_loaded_document_is_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        let document = minimal_with(|d| {
            d["version"] = json!("2.1");
            d["tokens"]["colors"]["tertiary"] = json!({"500": "#aa00ff"});
        });
        let path = write_system(&dir, "extra.json", document.clone());

        let system = load_design_system(&path, "extra").unwrap();
        assert_eq!(system.document().unwrap(), document);
    }

    #[test]
    fn test_failures_are_dropped_and_order_kept() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mini.json"), MINIMAL).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        fs::write(
            dir.path().join("second.json"),
            MINIMAL.replace("\"mini\"", "\"second\""),
        )
        .unwrap();

        let systems = load_design_systems(dir.path(), &["mini", "bad", "absent", "second"]);
        let ids: Vec<&str> = systems.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["mini", "second"]);
    }
}
