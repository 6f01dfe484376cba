//! Server configuration.
//!
//! Values come from the environment (a `.env` file is loaded first when
//! present) and can be overridden by CLI flags.

use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8082;

/// Default directory holding the built frontend (`trunk build` output).
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Default request body limit, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

/// Default number of receipts kept for the history panel.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Issued CSRF tokens remembered before the oldest are forgotten.
pub const DEFAULT_CSRF_CAPACITY: usize = 1024;

/// Effective configuration of the ingestion host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub history_limit: usize,
    pub csrf_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            history_limit: DEFAULT_HISTORY_LIMIT,
            csrf_capacity: DEFAULT_CSRF_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Read `INGESTION_*` variables from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(port) = parse_var::<u16>(&lookup, "INGESTION_PORT")? {
            config.port = port;
        }
        if let Some(dir) = lookup("INGESTION_STATIC_DIR").filter(|d| !d.is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(mb) = parse_var::<usize>(&lookup, "INGESTION_MAX_UPLOAD_MB")? {
            config = config.with_max_upload_mb(mb)?;
        }
        if let Some(limit) = parse_var::<usize>(&lookup, "INGESTION_HISTORY_LIMIT")? {
            if limit == 0 {
                return Err(ConfigError::Zero { name: "INGESTION_HISTORY_LIMIT" });
            }
            config.history_limit = limit;
        }

        Ok(config)
    }

    pub fn with_max_upload_mb(mut self, mb: usize) -> ConfigResult<Self> {
        if mb == 0 {
            return Err(ConfigError::Zero { name: "INGESTION_MAX_UPLOAD_MB" });
        }
        self.max_upload_bytes = mb.saturating_mul(1024 * 1024);
        Ok(self)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> ConfigResult<Option<T>> {
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("INGESTION_PORT", "9000"),
            ("INGESTION_STATIC_DIR", "/srv/www"),
            ("INGESTION_MAX_UPLOAD_MB", " 5 "),
            ("INGESTION_HISTORY_LIMIT", "3"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.history_limit, 3);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("INGESTION_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "INGESTION_PORT", .. }));

        let err = ServerConfig::from_lookup(lookup_from(&[("INGESTION_MAX_UPLOAD_MB", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { .. }));
    }
}
