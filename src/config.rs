// File: src/config.rs
use crate::core::substitution::MatchStrategy;
use crate::error::ConfigError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Engine settings, stored as JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscoderConfig {
    /// Longest accepted input, in characters. `0` disables the check.
    pub max_input_chars: usize,
    pub contraction_strategy: MatchStrategy,
    pub log_level: String,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 500,
            contraction_strategy: MatchStrategy::Sequential,
            log_level: "warn".to_string(),
        }
    }
}

impl TranscoderConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.level_filter()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Writes to a temp file beside `path` and renames it into place.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp_file.persist(path)?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

/// `<config_dir>/text-transcoder/config.json`, or `None` on platforms with
/// no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("text-transcoder");
    path.push("config.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TranscoderConfig::default();
        assert_eq!(config.max_input_chars, 500);
        assert_eq!(config.contraction_strategy, MatchStrategy::Sequential);
        assert_eq!(config.level_filter().ok(), Some(LevelFilter::Warn));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: TranscoderConfig =
            serde_json::from_str(r#"{"contraction_strategy":"longest_match"}"#).unwrap();
        assert_eq!(config.contraction_strategy, MatchStrategy::LongestMatch);
        assert_eq!(config.max_input_chars, 500);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn bad_level_is_invalid() {
        let config = TranscoderConfig { log_level: "loud".into(), ..TranscoderConfig::default() };
        assert!(matches!(config.level_filter(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("text-transcoder/config.json"));
        }
    }
}
