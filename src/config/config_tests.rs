use super::*;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.get_systems_dir(), PathBuf::from(DEFAULT_SYSTEMS_DIR));
    assert_eq!(config.get_export_dir(), PathBuf::from(DEFAULT_EXPORT_DIR));
    assert_eq!(config.get_default_system(), None);
    assert_eq!(config.get_restriction_class(), DEFAULT_RESTRICTION_CLASS);
}

#[test]
fn test_default_system_ids_match_shipped_definitions() {
    let ids = Config::default().get_system_ids();
    assert_eq!(ids.len(), DEFAULT_SYSTEM_IDS.len());
    assert_eq!(ids[0], "material");
    for id in &ids {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("design-systems")
            .join(format!("{}.json", id));
        assert!(path.exists(), "missing bundled definition {}", path.display());
    }
}

#[test]
fn test_config_camel_case_fields() {
    let json = r#"{
        "systemsDir": "/tmp/systems",
        "systems": ["github"],
        "defaultSystem": "github",
        "exportDir": "/tmp/out",
        "restrictionClass": "off-system"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.get_systems_dir(), PathBuf::from("/tmp/systems"));
    assert_eq!(config.get_system_ids(), vec!["github".to_string()]);
    assert_eq!(config.get_default_system(), Some("github"));
    assert_eq!(config.get_export_dir(), PathBuf::from("/tmp/out"));
    assert_eq!(config.get_restriction_class(), "off-system");
}

#[test]
fn test_config_serialization_skips_unset() {
    let config = Config {
        systems: Some(vec!["apple".to_string()]),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"systems":["apple"]}"#);

    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_systems_dir_tilde_expansion() {
    let config = Config {
        systems_dir: Some("~/tokens".to_string()),
        ..Default::default()
    };
    let dir = config.get_systems_dir();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("tokens"));
}

#[test]
fn test_load_config_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_from_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"{"systems": "material"}"#).unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_load_config_from_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"defaultSystem": "apple"}"#).unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.get_default_system(), Some("apple"));
    assert_eq!(config.get_system_ids().len(), DEFAULT_SYSTEM_IDS.len());
}

#[test]
fn test_try_load_config_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"systems": "material"}"#).unwrap();

    let err = try_load_config(&path).unwrap_err();
    assert!(matches!(err, crate::error::DesignStudioError::Config(_)));
    assert!(err.user_message().contains("must be an array of ids"));
}

#[test]
fn test_try_load_config_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = try_load_config(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
}
