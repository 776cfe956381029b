//! Local re-evaluation of station searches.
//!
//! Upstream mirrors filter server-side. The fallback corpus cannot, so its
//! stations are run through the same predicates here before being returned.

use crate::domain::{StationRecord, StationSearch};

/// Whether a station satisfies the name and country filters.
///
/// Name matches on a case-insensitive substring; country matches on
/// case-insensitive equality. An absent filter matches everything.
pub fn matches(station: &StationRecord, name: Option<&str>, country: Option<&str>) -> bool {
    let name_ok = name.is_none_or(|n| station.name().to_lowercase().contains(&n.to_lowercase()));
    let country_ok = country.is_none_or(|c| station.country().to_lowercase() == c.to_lowercase());
    name_ok && country_ok
}

/// Keep the stations matching the filters, in input order, at most `limit` of them.
pub fn apply(
    stations: Vec<StationRecord>,
    name: Option<&str>,
    country: Option<&str>,
    limit: usize,
) -> Vec<StationRecord> {
    stations
        .into_iter()
        .filter(|s| matches(s, name, country))
        .take(limit)
        .collect()
}

/// [`apply`] with the filters and limit of a search.
pub fn apply_search(stations: Vec<StationRecord>, search: &StationSearch) -> Vec<StationRecord> {
    apply(stations, search.name(), search.country(), search.limit())
}
