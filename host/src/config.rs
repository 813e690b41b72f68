//! Runtime settings for the static host, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `STOREFRONT_HOST` | `127.0.0.1` |
//! | `STOREFRONT_PORT` | `8080` |
//! | `STOREFRONT_OPEN_BROWSER` | on (`0`, `false`, `no`, `off` disable it) |

use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid STOREFRONT_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get("STOREFRONT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("STOREFRONT_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let open_browser = get("STOREFRONT_OPEN_BROWSER")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config_from(&[
            ("STOREFRONT_HOST", " 0.0.0.0 "),
            ("STOREFRONT_PORT", "3000"),
            ("STOREFRONT_OPEN_BROWSER", "Off"),
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_from(&[("STOREFRONT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
        assert!(config_from(&[("STOREFRONT_PORT", "70000")]).is_err());
    }
}
