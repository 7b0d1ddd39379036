//! Gateway configuration types.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `LISTEN_ADDR` | `listen_addr` |
//! | `DATA_DIR` | `data_dir` |
//! | `STATIC_DIR` | `static_dir` |
//! | `CORS_ORIGINS` | `cors_origins` (comma separated) |
//! | `MAX_BODY_BYTES` | `max_body_bytes` |
//! | `REQUEST_TIMEOUT_SECONDS` | `request_timeout_seconds` |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:8080").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding the `RocksDB` employee store.
    #[serde(default = "GatewayConfig::default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the web UI, served for every non-API path.
    #[serde(default = "GatewayConfig::default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins.
    #[serde(default = "GatewayConfig::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    #[serde(default = "GatewayConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:8080".to_string()
    }

    fn default_data_dir() -> PathBuf {
        PathBuf::from("./data/roster")
    }

    fn default_static_dir() -> PathBuf {
        PathBuf::from("./static")
    }

    fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    const fn default_max_body() -> usize {
        64 * 1024 // 64 KiB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Build a configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Unset variables keep their defaults. Numeric variables that fail to
    /// parse are logged and ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(dir) = lookup("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        if let Some(bytes) = parse_var(&lookup, "MAX_BODY_BYTES") {
            config.max_body_bytes = bytes;
        }
        if let Some(seconds) = parse_var(&lookup, "REQUEST_TIMEOUT_SECONDS") {
            config.request_timeout_seconds = seconds;
        }

        config
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable configuration value");
            None
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            data_dir: Self::default_data_dir(),
            static_dir: Self::default_static_dir(),
            cors_origins: Self::default_cors_origins(),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert_eq!(config.listen_addr, GatewayConfig::default().listen_addr);
        assert_eq!(config.data_dir, PathBuf::from("./data/roster"));
    }

    #[test]
    fn environment_overrides() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DATA_DIR", "/var/lib/roster"),
            ("STATIC_DIR", "/srv/roster-ui"),
            ("CORS_ORIGINS", "http://localhost:3000, https://hr.example.com,"),
            ("MAX_BODY_BYTES", "1024"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ]));

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/roster"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/roster-ui"));
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://hr.example.com"]
        );
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("MAX_BODY_BYTES", "lots"),
            ("REQUEST_TIMEOUT_SECONDS", "-1"),
        ]));
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{ "listen_addr": "127.0.0.1:1" }"#).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:1");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.cors_origins, vec!["*"]);
    }
}
