//! Process configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

use crate::planner::PlannerConfig;
use crate::tfl::{DEFAULT_BASE_URL, TflConfig};

/// Error reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub tfl: TflConfig,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment, after loading a
    /// `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`. Unset and blank variables take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("TFL_API_KEY").unwrap_or_else(|| {
            warn!("TFL_API_KEY not set, requests will use the anonymous rate limit");
            String::new()
        });

        let port: u16 = parse(&get, "PORT", 5000)?;
        let ip: IpAddr = parse(&get, "BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST))?;

        let defaults = TflConfig::new("");
        let tfl = TflConfig::new(api_key)
            .with_base_url(get("TFL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_timeout(parse(&get, "TFL_TIMEOUT_SECS", defaults.timeout_secs)?)
            .with_sequence_timeout(parse(
                &get,
                "TFL_SEQUENCE_TIMEOUT_SECS",
                defaults.sequence_timeout_secs,
            )?);

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            tfl,
            planner: PlannerConfig::default(),
        })
    }
}

fn parse<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.tfl.api_key, "");
        assert_eq!(config.tfl.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.tfl.timeout_secs, 8);
        assert_eq!(config.tfl.sequence_timeout_secs, 5);
        assert_eq!(config.planner.max_groups, 6);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("TFL_API_KEY", "secret"),
            ("TFL_BASE_URL", "http://localhost:9000"),
            ("PORT", "8080"),
            ("BIND_ADDR", "0.0.0.0"),
            ("TFL_TIMEOUT_SECS", "12"),
            ("TFL_SEQUENCE_TIMEOUT_SECS", " 3 "),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.tfl.api_key, "secret");
        assert_eq!(config.tfl.base_url, "http://localhost:9000");
        assert_eq!(config.tfl.timeout_secs, 12);
        assert_eq!(config.tfl.sequence_timeout_secs, 3);
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config_from(&[("PORT", ""), ("TFL_BASE_URL", "  ")]).unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.tfl.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for PORT: \"eighty\"");
    }

    #[test]
    fn invalid_bind_addr_rejected() {
        assert!(config_from(&[("BIND_ADDR", "localhost:5000")]).is_err());
    }
}
