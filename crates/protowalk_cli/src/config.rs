//! CLI configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use miette::Diagnostic;
use protowalk_ast::VisiteeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the protowalk CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Output format.
    pub format: OutputFormat,

    /// Kinds listed by `protowalk list` when no `--kind` is given.
    /// Empty means every kind.
    pub kinds: Vec<VisiteeKind>,

    /// Indent width used by `protowalk outline`.
    pub indent: usize,

    /// Abort `protowalk list` after this many milliseconds.
    pub timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            kinds: Vec::new(),
            indent: 2,
            timeout_ms: None,
        }
    }
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    #[diagnostic(code(protowalk::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    #[diagnostic(
        code(protowalk::config::parse),
        help("see `protowalk --help` for the supported keys")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Configuration file looked up in the working directory.
    pub const CONFIG_FILE: &'static str = ".protowalk.json";

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::CONFIG_FILE`] is used
    /// when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(Self::CONFIG_FILE);
                if !path.is_file() {
                    debug!("no {} found, using defaults", Self::CONFIG_FILE);
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::from_file(&path)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the walk timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Returns true if `kind` should be reported by `protowalk list`.
    pub fn selects(&self, kind: VisiteeKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.kinds.is_empty());
        assert_eq!(config.indent, 2);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(
            r#"{"format": "json", "kinds": ["message", "rpc"], "indent": 4, "timeoutMs": 250}"#,
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.kinds, vec![VisiteeKind::Message, VisiteeKind::Rpc]);
        assert_eq!(config.indent, 4);
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let config = Config::from_json(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{"colour": true}"#).is_err());
    }

    #[test]
    fn test_selects() {
        let all = Config::default();
        assert!(all.selects(VisiteeKind::Comment));

        let some = Config {
            kinds: vec![VisiteeKind::Service],
            ..Config::default()
        };
        assert!(some.selects(VisiteeKind::Service));
        assert!(!some.selects(VisiteeKind::Rpc));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"indent": 8}"#).unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.indent, 8);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
