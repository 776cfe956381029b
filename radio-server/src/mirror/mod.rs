//! Radio Browser mirror client.
//!
//! Radio Browser is served by several interchangeable mirrors, any of which
//! may be down or slow at a given moment. Requests go to one mirror at a
//! time, in a fixed order:
//!
//! - The primary tier (the `*.api.radio-browser.info` servers) is tried
//!   first, then the alternative hostnames.
//! - Every attempt is bounded by a timeout that depends on the operation:
//!   reads get a few seconds, click registration less.
//! - Non-2xx statuses, undecodable or empty bodies, connection errors and
//!   timeouts all move on to the next mirror. One attempt per mirror.

mod client;
mod config;
mod error;
mod failover;

pub use client::{Fetched, MirrorClient};
pub use config::{
    DEFAULT_ALTERNATIVE_MIRRORS, DEFAULT_PRIMARY_MIRRORS, DEFAULT_USER_AGENT, MirrorConfig,
    MirrorEndpoint, Tier,
};
pub use error::MirrorError;
pub use failover::first_success;
