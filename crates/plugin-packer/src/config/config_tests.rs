#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

// ============================================================================
// Parsing tests
// ============================================================================

#[test_case(r#"{"EngineVersions": ["4.27", "5.0", "5.1"]}"#, &["4.27", "5.0", "5.1"])]
#[test_case(r#"{"EngineVersions": [5.1, "5.2"]}"#, &["5.1", "5.2"])]
#[test_case(r#"{"EngineVersions": ["5.3", null, true]}"#, &["5.3"])]
#[test_case(r#"{"EngineVersions": []}"#, &[])]
#[test_case(r#"{}"#, &[])]
#[test_case(r#"{"Other": 1}"#, &[])]
fn PackerConfig___engine_versions_json___parses_correctly(json: &str, expected: &[&str]) {
    let config = PackerConfig::from_json(json).unwrap();

    assert_eq!(config.engine_versions(), expected);
}

#[test]
fn PackerConfig___from_json___rejects_wrong_shape() {
    assert!(PackerConfig::from_json(r#"{"EngineVersions": "5.1"}"#).is_err());
    assert!(PackerConfig::from_json("not json").is_err());
}

// ============================================================================
// Loading tests
// ============================================================================

#[test]
fn PackerConfig___load___reads_file_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE),
        r#"{"EngineVersions": ["5.0", "5.1"]}"#,
    )
    .unwrap();

    let config = PackerConfig::load(temp_dir.path()).unwrap();

    assert_eq!(config.engine_versions(), vec!["5.0", "5.1"]);
}

#[test]
fn PackerConfig___load___missing_file___returns_none() {
    let temp_dir = TempDir::new().unwrap();

    assert!(PackerConfig::load(temp_dir.path()).is_none());
}

#[test]
fn PackerConfig___load___malformed_file___returns_none() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE), "{ EngineVersions: [").unwrap();

    assert!(PackerConfig::load(temp_dir.path()).is_none());
}

// ============================================================================
// Target selection tests
// ============================================================================

#[test]
fn select_engine_versions___cli_override___wins_over_everything() {
    let config = PackerConfig::from_json(r#"{"EngineVersions": ["5.0", "5.1"]}"#).unwrap();

    let versions = select_engine_versions(Some("5.3"), Some(&config), "4.27");

    assert_eq!(versions, vec!["5.3"]);
}

#[test]
fn select_engine_versions___config_list___wins_over_descriptor() {
    let config = PackerConfig::from_json(r#"{"EngineVersions": ["5.0", "5.1"]}"#).unwrap();

    let versions = select_engine_versions(None, Some(&config), "4.27");

    assert_eq!(versions, vec!["5.0", "5.1"]);
}

#[test]
fn select_engine_versions___empty_config_list___falls_back_to_descriptor() {
    let config = PackerConfig::from_json(r#"{"EngineVersions": []}"#).unwrap();

    let versions = select_engine_versions(None, Some(&config), "4.27");

    assert_eq!(versions, vec!["4.27"]);
}

#[test]
fn select_engine_versions___no_config___falls_back_to_descriptor() {
    let versions = select_engine_versions(None, None, "Unknown");

    assert_eq!(versions, vec!["Unknown"]);
}
