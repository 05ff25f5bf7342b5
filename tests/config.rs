use std::fs;
use tempfile::tempdir;
use transcode_core::{ConfigError, MatchStrategy, TranscoderConfig};

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = TranscoderConfig {
        max_input_chars: 0,
        contraction_strategy: MatchStrategy::LongestMatch,
        log_level: "debug".to_string(),
    };
    config.save(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"longest_match\""));
    assert_eq!(TranscoderConfig::load(&path).unwrap(), config);
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "stale").unwrap();

    TranscoderConfig::default().save(&path).unwrap();
    assert_eq!(TranscoderConfig::load(&path).unwrap(), TranscoderConfig::default());
    // Only the target remains; the temp file was renamed over it.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(TranscoderConfig::load(&path), Err(ConfigError::Io(_))));
    assert_eq!(TranscoderConfig::load_or_default(&path).unwrap(), TranscoderConfig::default());
}

#[test]
fn malformed_files_are_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(TranscoderConfig::load_or_default(&path), Err(ConfigError::Parse(_))));

    fs::write(&path, r#"{"contraction_strategy":"shortest"}"#).unwrap();
    assert!(matches!(TranscoderConfig::load(&path), Err(ConfigError::Parse(_))));

    fs::write(&path, r#"{"log_level":"chatty"}"#).unwrap();
    assert!(matches!(TranscoderConfig::load(&path), Err(ConfigError::Invalid(_))));
}
