//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationSearch;

/// Limit used when the request doesn't give one.
pub const DEFAULT_LIMIT: usize = 100;

/// Largest limit passed on to the directory.
pub const MAX_LIMIT: usize = 1000;

/// Query parameters for the popular stations list.
#[derive(Debug, Deserialize)]
pub struct PopularStationsRequest {
    /// Maximum number of stations (defaults to 100)
    pub limit: Option<String>,
}

/// Query parameters for a station search.
#[derive(Debug, Deserialize)]
pub struct SearchStationsRequest {
    /// Substring of the station name
    pub name: Option<String>,

    /// Exact country name
    pub country: Option<String>,

    /// Maximum number of stations (defaults to 100)
    pub limit: Option<String>,
}

impl SearchStationsRequest {
    /// Validate into a search.
    pub fn into_search(self) -> Result<StationSearch, String> {
        let limit = parse_limit(self.limit.as_deref())?;
        Ok(StationSearch::new(limit)
            .with_name(self.name)
            .with_country(self.country))
    }
}

/// Coerce an optional `limit` parameter into a positive count.
///
/// Absent or blank means [`DEFAULT_LIMIT`]; values above [`MAX_LIMIT`] are
/// clamped.
pub fn parse_limit(limit: Option<&str>) -> Result<usize, String> {
    let raw = match limit.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_LIMIT),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(usize::try_from(n).unwrap_or(MAX_LIMIT).min(MAX_LIMIT)),
        Ok(_) => Err(format!("limit must be a positive integer, got {raw}")),
        // Digits too large for i64 are still a positive count.
        Err(_) if raw.bytes().all(|b| b.is_ascii_digit()) => Ok(MAX_LIMIT),
        Err(_) => Err(format!("limit must be a positive integer, got {raw:?}")),
    }
}

/// Greeting returned by the API root.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
