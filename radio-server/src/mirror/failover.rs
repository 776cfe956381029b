//! Ordered failover over a list of candidates.

use std::fmt::Display;
use std::future::Future;

use tracing::warn;

/// Try `attempt` against each candidate in order and return the first success.
///
/// Candidates are attempted strictly one after another; a failure is logged
/// and the next candidate is tried. Returns `None` once every candidate has
/// failed, leaving the choice of default to the caller.
pub async fn first_success<'a, C, T, E, F, Fut>(
    candidates: &'a [C],
    mut attempt: F,
) -> Option<(&'a C, T)>
where
    C: Display,
    E: Display,
    F: FnMut(&'a C) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    for candidate in candidates {
        match attempt(candidate).await {
            Ok(value) => return Some((candidate, value)),
            Err(e) => warn!(candidate = %candidate, error = %e, "attempt failed, trying next"),
        }
    }
    None
}
