//! Mirror list and per-operation timeouts.

use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::domain::OperationWeight;

use super::error::MirrorError;

/// Radio Browser API servers, tried first.
pub const DEFAULT_PRIMARY_MIRRORS: &[&str] = &[
    "https://de1.api.radio-browser.info",
    "https://nl.api.radio-browser.info",
    "https://at1.api.radio-browser.info",
    "https://fr1.api.radio-browser.info",
];

/// Alternative hostnames, tried once every primary mirror has failed.
pub const DEFAULT_ALTERNATIVE_MIRRORS: &[&str] = &[
    "https://www.radio-browser.info/webservice",
    "https://api.radio-browser.info",
];

/// User-Agent sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = "GlobalRadioApp/1.0";

/// Default per-attempt timeout for listings and searches.
const DEFAULT_READ_TIMEOUT_SECS: u64 = 8;

/// Default per-attempt timeout for click registration.
const DEFAULT_CLICK_TIMEOUT_SECS: u64 = 5;

/// Priority group a mirror belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Primary,
    Alternative,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Primary => f.write_str("primary"),
            Tier::Alternative => f.write_str("alternative"),
        }
    }
}

/// One instance of the upstream directory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorEndpoint {
    base: Url,
    tier: Tier,
}

impl MirrorEndpoint {
    /// Parse a mirror base URL.
    ///
    /// The URL must be absolute http(s). A trailing slash is ignored.
    pub fn parse(url: &str, tier: Tier) -> Result<Self, MirrorError> {
        let invalid = |reason: &str| MirrorError::InvalidMirror {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let base = Url::parse(url.trim()).map_err(|e| invalid(&e.to_string()))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(invalid("scheme must be http or https"));
        }
        if base.cannot_be_a_base() || base.host_str().is_none() {
            return Err(invalid("URL has no host"));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment"));
        }

        Ok(Self { base, tier })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Base URL without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Full URL of an endpoint below this mirror's base path.
    ///
    /// Each segment is percent-encoded on its own, so a segment containing
    /// `/` cannot escape into another path.
    pub fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl fmt::Display for MirrorEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the mirror client.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Tier 1 base URLs, in attempt order
    pub primary: Vec<String>,
    /// Tier 2 base URLs, in attempt order
    pub alternative: Vec<String>,
    /// Per-attempt timeout for read operations in seconds
    pub read_timeout_secs: u64,
    /// Per-attempt timeout for click registration in seconds
    pub click_timeout_secs: u64,
    /// Identifying User-Agent header
    pub user_agent: String,
}

impl MirrorConfig {
    /// Create a config with the public Radio Browser mirrors.
    pub fn new() -> Self {
        Self {
            primary: to_strings(DEFAULT_PRIMARY_MIRRORS),
            alternative: to_strings(DEFAULT_ALTERNATIVE_MIRRORS),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            click_timeout_secs: DEFAULT_CLICK_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Replace the primary tier.
    pub fn with_primary<S: Into<String>>(mut self, urls: impl IntoIterator<Item = S>) -> Self {
        self.primary = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the alternative tier.
    pub fn with_alternative<S: Into<String>>(mut self, urls: impl IntoIterator<Item = S>) -> Self {
        self.alternative = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, secs: u64) -> Self {
        self.read_timeout_secs = secs;
        self
    }

    /// Set the click registration timeout.
    pub fn with_click_timeout(mut self, secs: u64) -> Self {
        self.click_timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Per-attempt timeout for an operation of the given weight.
    pub fn timeout_for(&self, weight: OperationWeight) -> Duration {
        match weight {
            OperationWeight::Read => Duration::from_secs(self.read_timeout_secs),
            OperationWeight::Click => Duration::from_secs(self.click_timeout_secs),
        }
    }

    /// Parse both tiers into a single list, primary mirrors first.
    pub fn endpoints(&self) -> Result<Vec<MirrorEndpoint>, MirrorError> {
        let primary = self
            .primary
            .iter()
            .map(|url| MirrorEndpoint::parse(url, Tier::Primary));
        let alternative = self
            .alternative
            .iter()
            .map(|url| MirrorEndpoint::parse(url, Tier::Alternative));

        let endpoints = primary.chain(alternative).collect::<Result<Vec<_>, _>>()?;
        if endpoints.is_empty() {
            return Err(MirrorError::NoMirrors);
        }
        Ok(endpoints)
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn to_strings(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|u| u.to_string()).collect()
}
