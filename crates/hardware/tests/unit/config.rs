//! # Configuration Tests
//!
//! Defaults, JSON deserialization and file loading for the run configuration.

use std::io::Write;

use ls8_core::common::error::{EXIT_FILE_NOT_FOUND, EXIT_LOAD};
use ls8_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(config.general.strict_opcodes);
    assert_eq!(config.general.initial_sp, 0xF4);
}

#[test]
fn test_empty_json_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    assert_eq!(
        Config::from_json(r#"{"general": {}}"#).unwrap(),
        Config::default()
    );
}

#[test]
fn test_partial_override() {
    let config = Config::from_json(r#"{"general": {"trace_instructions": true}}"#).unwrap();
    assert!(config.general.trace_instructions);
    assert!(config.general.strict_opcodes);
    assert_eq!(config.general.initial_sp, 0xF4);
}

#[test]
fn test_full_override() {
    let json = r#"{
        "general": {
            "trace_instructions": true,
            "strict_opcodes": false,
            "initial_sp": 128
        }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(
        config.general,
        GeneralConfig {
            trace_instructions: true,
            strict_opcodes: false,
            initial_sp: 0x80,
        }
    );
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = Config::from_json("{ general: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.exit_code(), EXIT_LOAD);
}

#[test]
fn test_out_of_range_sp_is_rejected() {
    let err = Config::from_json(r#"{"general": {"initial_sp": 256}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"general": {"strict_opcodes": false}}"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.general.strict_opcodes);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(&dir.path().join("ls8.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
    assert_eq!(err.exit_code(), EXIT_FILE_NOT_FOUND);
}
