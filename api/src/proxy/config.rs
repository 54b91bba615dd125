use std::env;
use std::net::AddrParseError;
use std::net::IpAddr;
use std::net::SocketAddr;
use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_UPSTREAM_URL: &str = "https://api.unirateapi.com/api";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("invalid LISTEN_HOST: {0}")]
    InvalidHost(#[from] AddrParseError),
}

/// Settings for the proxy server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

impl ProxyConfig {
    /// Reads `UNIRATE_API_KEY`, `UNIRATE_BASE_URL`, `LISTEN_HOST` and `PORT`.
    ///
    /// A missing API key is not an error: the server still starts and every
    /// endpoint reports the key as unconfigured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("UNIRATE_API_KEY").filter(|k| !k.trim().is_empty());
        let upstream_url = lookup("UNIRATE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let host = lookup("LISTEN_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse()?;
        let port = match lookup("PORT") {
            Some(p) => p.parse()?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            upstream_url,
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ProxyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ProxyConfig::default());
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn reads_key_port_and_upstream() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("UNIRATE_API_KEY", "secret"),
            ("UNIRATE_BASE_URL", "http://localhost:9000/api/"),
            ("PORT", "8080"),
            ("LISTEN_HOST", "0.0.0.0"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.upstream_url, "http://localhost:9000/api");
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = ProxyConfig::from_lookup(lookup(&[("UNIRATE_API_KEY", "  ")])).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ProxyConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
