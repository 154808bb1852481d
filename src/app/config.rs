use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pin::DEFAULT_PIN_LENGTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pin_length: usize,
    pub masked: bool,
    pub digits_only: bool,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pinpad")
            .join("pinpad.log");

        Self {
            pin_length: DEFAULT_PIN_LENGTH,
            masked: true,
            digits_only: true,
            log_path,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pinpad")
            .join("config.json")
    }

    /// Loads the JSON config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command line flags win over the file.
    pub fn apply_args(mut self, args: &CliArgs) -> Self {
        if let Some(len) = args.length {
            self.pin_length = len;
        }
        if args.reveal {
            self.masked = false;
        }
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub length: Option<usize>,
    pub reveal: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parses flags, program name already skipped.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-l" | "--length" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--length"))?;
                    let len = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue { flag: "--length", value })?;
                    parsed.length = Some(len);
                }
                "-r" | "--reveal" => parsed.reveal = true,
                "-c" | "--config" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--config"))?;
                    parsed.config = Some(PathBuf::from(value));
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pin_length, 4);
        assert!(config.masked);
        assert!(config.digits_only);
        assert!(config.log_path.ends_with("pinpad/pinpad.log"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.pin_length, 4);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "pin_length": 6, "masked": false }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.pin_length, 6);
        assert!(!config.masked);
        assert!(config.digits_only);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ pin_length: ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_parse_args() {
        let parsed = CliArgs::parse(args(&["--length", "6", "-r", "-c", "/tmp/p.json"])).unwrap();
        assert_eq!(parsed.length, Some(6));
        assert!(parsed.reveal);
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/p.json")));

        let config = AppConfig::default().apply_args(&parsed);
        assert_eq!(config.pin_length, 6);
        assert!(!config.masked);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            CliArgs::parse(args(&["--length"])),
            Err(ConfigError::MissingValue("--length"))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--length", "four"])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument(_))
        ));
    }
}
