//! Integration tests for Configuration System

use crate::integration::test_utils::with_config_env;
use human_writer::config::{global_config_path, ConfigLoader, WriterConfig};
use human_writer::error::RunError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = with_config_env(&temp_dir, &[], || ConfigLoader::load().unwrap());
    assert_eq!(config, WriterConfig::default());
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("writer.toml");
    fs::write(
        &config_file,
        r#"
[logging]
level = "debug"
format = "json"

[mirror]
sort_entries = false
"#,
    )
    .unwrap();

    let config = with_config_env(&temp_dir, &[], || {
        ConfigLoader::load_from_file(&config_file).unwrap()
    });
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stderr");
    assert!(!config.mirror.sort_entries);
}

#[test]
fn test_global_file_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    let config = with_config_env(&temp_dir, &[], || {
        let path = global_config_path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[logging]\noutput = \"file\"\n").unwrap();
        ConfigLoader::load().unwrap()
    });
    assert_eq!(config.logging.output, "file");
}

#[test]
fn test_environment_overrides_files() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("writer.toml");
    fs::write(&config_file, "[mirror]\nsort_entries = true\n").unwrap();

    let config = with_config_env(
        &temp_dir,
        &[
            ("HUMAN_WRITER__MIRROR__SORT_ENTRIES", "false"),
            ("HUMAN_WRITER__LOGGING__LEVEL", "error"),
        ],
        || ConfigLoader::load_from_file(&config_file).unwrap(),
    );
    assert!(!config.mirror.sort_entries);
    assert_eq!(config.logging.level, "error");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let result = with_config_env(&temp_dir, &[], || ConfigLoader::load_from_file(&missing));
    assert!(matches!(result, Err(RunError::Config(_))));
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "[mirror\nsort_entries = ").unwrap();

    let result = with_config_env(&temp_dir, &[], || ConfigLoader::load_from_file(&config_file));
    assert!(matches!(result, Err(RunError::Config(_))));
}
