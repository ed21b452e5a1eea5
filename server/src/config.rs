use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDRESS value '{value}': {source}")]
    InvalidBindAddress {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("DIST_DIR '{0}' has no index.html; build the web app first")]
    MissingIndex(PathBuf),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress { value: bind_raw, source })?;

        let dist_dir = var("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        let log_level = var("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self { bind_address, dist_dir, log_level })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.index_file().is_file() {
            return Err(ConfigError::MissingIndex(self.dist_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDRESS", "0.0.0.0:3000"),
            ("DIST_DIR", "  "),
            ("LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDRESS", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress { .. }));
    }

    #[test]
    fn test_validate_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            dist_dir: dir.path().to_path_buf(),
            log_level: "info".to_string(),
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}
