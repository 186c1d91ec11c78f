//! Database configuration from environment variables.
//!
//! Every variable is optional; unset ones keep the [`DbConfig::new`]
//! defaults.
//!
//! | Variable                       | Default              |
//! |--------------------------------|----------------------|
//! | `VOLT_DB_PATH`                 | `./voltstore.db`     |
//! | `VOLT_DB_MAX_CONNECTIONS`      | `5`                  |
//! | `VOLT_DB_MIN_CONNECTIONS`      | `1`                  |
//! | `VOLT_DB_CONNECT_TIMEOUT_SECS` | `30`                 |
//! | `VOLT_DB_RUN_MIGRATIONS`       | `true`               |

use std::env;
use std::time::Duration;

use crate::pool::DbConfig;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./voltstore.db";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{max} must be at least {min}")]
    PoolBounds { min: &'static str, max: &'static str },
}

impl DbConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &'static str| -> Result<Option<u64>, ConfigError> {
            lookup(key)
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
                })
                .transpose()
        };

        let mut config =
            DbConfig::new(lookup("VOLT_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()));

        if let Some(max) = parse("VOLT_DB_MAX_CONNECTIONS")? {
            let max = u32::try_from(max)
                .map_err(|_| ConfigError::InvalidValue("VOLT_DB_MAX_CONNECTIONS".to_string()))?;
            config = config.max_connections(max);
        }

        if let Some(min) = parse("VOLT_DB_MIN_CONNECTIONS")? {
            let min = u32::try_from(min)
                .map_err(|_| ConfigError::InvalidValue("VOLT_DB_MIN_CONNECTIONS".to_string()))?;
            config = config.min_connections(min);
        }

        if let Some(secs) = parse("VOLT_DB_CONNECT_TIMEOUT_SECS")? {
            config = config.connect_timeout(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup("VOLT_DB_RUN_MIGRATIONS") {
            let run = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "VOLT_DB_RUN_MIGRATIONS".to_string(),
                    ))
                }
            };
            config = config.run_migrations(run);
        }

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "VOLT_DB_MAX_CONNECTIONS".to_string(),
            ));
        }
        if config.min_connections > config.max_connections {
            return Err(ConfigError::PoolBounds {
                min: "VOLT_DB_MIN_CONNECTIONS",
                max: "VOLT_DB_MAX_CONNECTIONS",
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn load(vars: &[(&str, &str)]) -> Result<DbConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DbConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VOLT_DB_PATH", "/var/lib/volt/catalog.db"),
            ("VOLT_DB_MAX_CONNECTIONS", "8"),
            ("VOLT_DB_MIN_CONNECTIONS", "2"),
            ("VOLT_DB_CONNECT_TIMEOUT_SECS", "3"),
            ("VOLT_DB_RUN_MIGRATIONS", "no"),
        ])
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/volt/catalog.db"));
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            load(&[("VOLT_DB_MAX_CONNECTIONS", "lots")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("VOLT_DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("VOLT_DB_RUN_MIGRATIONS", "maybe")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[
                ("VOLT_DB_MAX_CONNECTIONS", "2"),
                ("VOLT_DB_MIN_CONNECTIONS", "3")
            ]),
            Err(ConfigError::PoolBounds { .. })
        ));
    }
}
