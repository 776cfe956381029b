//! Process configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::mirror::MirrorConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8001);

/// Errors in environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable that must be a positive integer isn't one
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// The listen address cannot be parsed
    #[error("{var} is not a socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    /// A mirror list variable is set but names no mirror
    #[error("{var} lists no mirrors")]
    EmptyMirrorList { var: &'static str },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream mirrors and timeouts
    pub mirrors: MirrorConfig,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// variables it doesn't know.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut mirrors = MirrorConfig::default();

        if let Some(value) = lookup("RADIO_PRIMARY_MIRRORS") {
            mirrors = mirrors.with_primary(parse_mirror_list("RADIO_PRIMARY_MIRRORS", &value)?);
        }
        if let Some(value) = lookup("RADIO_ALTERNATIVE_MIRRORS") {
            mirrors =
                mirrors.with_alternative(parse_mirror_list("RADIO_ALTERNATIVE_MIRRORS", &value)?);
        }
        if let Some(value) = lookup("RADIO_READ_TIMEOUT_SECS") {
            mirrors = mirrors.with_read_timeout(parse_secs("RADIO_READ_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = lookup("RADIO_CLICK_TIMEOUT_SECS") {
            mirrors = mirrors.with_click_timeout(parse_secs("RADIO_CLICK_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = lookup("RADIO_USER_AGENT") {
            mirrors = mirrors.with_user_agent(value);
        }

        let bind_addr = match lookup("RADIO_BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: "RADIO_BIND_ADDR",
                    value,
                })?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self { mirrors, bind_addr })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mirrors: MirrorConfig::default(),
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

/// Split a comma-separated mirror list, dropping blanks and trailing slashes.
fn parse_mirror_list(var: &'static str, value: &str) -> Result<Vec<String>, ConfigError> {
    let urls: Vec<String> = value
        .split(',')
        .map(|u| u.trim().trim_end_matches('/'))
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(ConfigError::EmptyMirrorList { var });
    }
    Ok(urls)
}

fn parse_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(config.bind_addr, defaults.bind_addr);
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8001)));
        assert_eq!(config.mirrors.primary, defaults.mirrors.primary);
        assert_eq!(config.mirrors.alternative, defaults.mirrors.alternative);
        assert_eq!(config.mirrors.read_timeout_secs, 8);
        assert_eq!(config.mirrors.click_timeout_secs, 5);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RADIO_PRIMARY_MIRRORS", "https://a.example/, https://b.example"),
            ("RADIO_ALTERNATIVE_MIRRORS", "https://c.example/json"),
            ("RADIO_READ_TIMEOUT_SECS", "3"),
            ("RADIO_CLICK_TIMEOUT_SECS", " 2 "),
            ("RADIO_USER_AGENT", "TestAgent/0.1"),
            ("RADIO_BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(
            config.mirrors.primary,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.mirrors.alternative, vec!["https://c.example/json"]);
        assert_eq!(config.mirrors.read_timeout_secs, 3);
        assert_eq!(config.mirrors.click_timeout_secs, 2);
        assert_eq!(config.mirrors.user_agent, "TestAgent/0.1");
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("RADIO_READ_TIMEOUT_SECS", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "RADIO_READ_TIMEOUT_SECS",
                value: "0".into()
            }
        );
    }

    #[test]
    fn blank_mirror_list_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("RADIO_PRIMARY_MIRRORS", " , ,")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyMirrorList {
                var: "RADIO_PRIMARY_MIRRORS"
            }
        );
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("RADIO_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
        assert!(err.to_string().contains("RADIO_BIND_ADDR"));
    }
}
