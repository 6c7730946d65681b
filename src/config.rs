//! Optional user configuration, read from `<config dir>/jobform/config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{ExperienceRule, Validator};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`Config`].
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-tunable settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// `tracing` filter directive for the log file.
    pub log_filter: String,
    /// Scope of the "experience greater than 0" rule.
    pub experience_rule: ExperienceRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "jobform=info".to_string(),
            experience_rule: ExperienceRule::default(),
        }
    }
}

impl Config {
    /// Returns the platform config file path, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jobform").join("config.json"))
    }

    /// Loads the config from the platform path, falling back to defaults
    /// when there is no config dir or no file.
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the validator these settings describe.
    pub fn validator(&self) -> Validator {
        Validator::new(self.experience_rule)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "jobform=info");
        assert_eq!(config.experience_rule, ExperienceRule::Ungated);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"experience-rule": "gated"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.experience_rule, ExperienceRule::Gated);
        assert_eq!(config.log_filter, "jobform=info");
        assert_eq!(
            config.validator().experience_rule(),
            ExperienceRule::Gated
        );
    }

    #[test]
    fn full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"log-filter": "jobform=debug", "experience-rule": "ungated"}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_filter, "jobform=debug");
        assert_eq!(config.experience_rule, ExperienceRule::Ungated);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"experience-rule": "sometimes"}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
