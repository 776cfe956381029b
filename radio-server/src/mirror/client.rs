//! Radio Browser mirror client.
//!
//! Sends each request to the configured mirrors one at a time, primary tier
//! first, and returns the first usable answer. Mirror failures never reach
//! the caller: an exhausted mirror list is reported as `None`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::domain::{OperationWeight, QueryOperation};

use super::config::{MirrorConfig, MirrorEndpoint};
use super::error::MirrorError;
use super::failover::first_success;

/// Records fetched from a mirror, with the mirror that served them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub records: Vec<T>,
    pub mirror: MirrorEndpoint,
}

/// Failover client for the upstream station directory.
///
/// The mirror list is fixed at construction and shared between clones.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: reqwest::Client,
    mirrors: Arc<[MirrorEndpoint]>,
    read_timeout: Duration,
    click_timeout: Duration,
}

impl MirrorClient {
    /// Create a new mirror client with the given configuration.
    pub fn new(config: MirrorConfig) -> Result<Self, MirrorError> {
        let mirrors = config.endpoints()?;

        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| MirrorError::InvalidMirror {
                url: String::new(),
                reason: format!("invalid User-Agent {:?}", config.user_agent),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            mirrors: mirrors.into(),
            read_timeout: config.timeout_for(OperationWeight::Read),
            click_timeout: config.timeout_for(OperationWeight::Click),
        })
    }

    /// Mirrors in attempt order.
    pub fn mirrors(&self) -> &[MirrorEndpoint] {
        &self.mirrors
    }

    fn timeout_for(&self, weight: OperationWeight) -> Duration {
        match weight {
            OperationWeight::Read => self.read_timeout,
            OperationWeight::Click => self.click_timeout,
        }
    }

    /// Fetch the records of a read operation from the first mirror that has them.
    ///
    /// A mirror counts only if it answers with a success status and a
    /// non-empty JSON array of `T`. Returns `None` when every mirror in both
    /// tiers has failed. Click registrations go through
    /// [`MirrorClient::register_click`] instead.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &QueryOperation,
    ) -> Option<Fetched<T>> {
        if operation.weight() != OperationWeight::Read {
            warn!(?operation, "fetch called with a non-read operation");
            return None;
        }

        let found = first_success(self.mirrors(), |mirror| {
            self.attempt_read::<T>(mirror, operation)
        })
        .await;

        match found {
            Some((mirror, records)) => {
                info!(mirror = %mirror, count = records.len(), "fetched records");
                Some(Fetched {
                    records,
                    mirror: mirror.clone(),
                })
            }
            None => {
                error!(?operation, mirrors = self.mirrors.len(), "all mirrors failed");
                None
            }
        }
    }

    /// Register a station click with the first mirror that accepts it.
    ///
    /// Returns the accepting mirror, or `None` if every mirror failed.
    pub async fn register_click(&self, station_id: &str) -> Option<MirrorEndpoint> {
        let operation = QueryOperation::RegisterClick {
            station_id: station_id.to_string(),
        };

        let found = first_success(self.mirrors(), |mirror| {
            self.attempt_click(mirror, &operation)
        })
        .await;

        match found {
            Some((mirror, ())) => {
                debug!(mirror = %mirror, station_id, "click registered");
                Some(mirror.clone())
            }
            None => {
                warn!(station_id, "click registration failed on every mirror");
                None
            }
        }
    }

    /// Send one request for `operation` to `mirror` and check its status.
    async fn send(
        &self,
        mirror: &MirrorEndpoint,
        operation: &QueryOperation,
    ) -> Result<reqwest::Response, MirrorError> {
        let url = mirror.endpoint_url(&operation.path_segments());
        let timeout = self.timeout_for(operation.weight());
        debug!(%url, tier = %mirror.tier(), ?timeout, "trying mirror");

        let request = match operation.weight() {
            OperationWeight::Read => self.http.get(url),
            OperationWeight::Click => self.http.post(url),
        };

        let response = request
            .query(&operation.query_params())
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn attempt_read<T: DeserializeOwned>(
        &self,
        mirror: &MirrorEndpoint,
        operation: &QueryOperation,
    ) -> Result<Vec<T>, MirrorError> {
        let response = self.send(mirror, operation).await?;
        let body = response.text().await?;

        let records: Vec<T> = serde_json::from_str(&body).map_err(|e| MirrorError::Json {
            message: e.to_string(),
            body: body.chars().take(500).collect(),
        })?;

        if records.is_empty() {
            return Err(MirrorError::Empty);
        }

        Ok(records)
    }

    async fn attempt_click(
        &self,
        mirror: &MirrorEndpoint,
        operation: &QueryOperation,
    ) -> Result<(), MirrorError> {
        self.send(mirror, operation).await.map(|_| ())
    }
}
