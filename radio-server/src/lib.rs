//! Radio station directory server.
//!
//! Proxies the Radio Browser directory across its mirrors, and keeps
//! answering from a built-in station list when none of them respond.

pub mod config;
pub mod directory;
pub mod domain;
pub mod fallback;
pub mod filter;
pub mod mirror;
pub mod web;
