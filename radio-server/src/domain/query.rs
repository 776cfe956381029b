//! Directory query operations.

/// Parameters of a station search.
///
/// Filters are trimmed on construction; a filter that is empty after
/// trimming is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSearch {
    name: Option<String>,
    country: Option<String>,
    limit: usize,
}

impl StationSearch {
    /// Create an unfiltered search returning at most `limit` stations.
    pub fn new(limit: usize) -> Self {
        Self {
            name: None,
            country: None,
            limit,
        }
    }

    /// Restrict to stations whose name contains `name`.
    pub fn with_name(mut self, name: Option<impl AsRef<str>>) -> Self {
        self.name = normalize(name);
        self
    }

    /// Restrict to stations in exactly this country.
    pub fn with_country(mut self, country: Option<impl AsRef<str>>) -> Self {
        self.country = normalize(country);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

fn normalize(value: Option<impl AsRef<str>>) -> Option<String> {
    value
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// How expensive an operation is, which decides its per-attempt timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationWeight {
    /// Listing or searching; the caller waits for the records.
    Read,
    /// Best-effort click registration.
    Click,
}

/// A request against the station directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOperation {
    /// Most-voted stations.
    PopularStations { limit: usize },
    /// Stations matching a name and/or country.
    SearchStations(StationSearch),
    /// Countries with their station counts.
    ListCountries,
    /// Tell the directory a station was played.
    RegisterClick { station_id: String },
}

impl QueryOperation {
    pub fn weight(&self) -> OperationWeight {
        match self {
            QueryOperation::RegisterClick { .. } => OperationWeight::Click,
            _ => OperationWeight::Read,
        }
    }

    /// Path segments of the upstream endpoint, relative to a mirror's base URL.
    ///
    /// Segments are unescaped; the caller is responsible for encoding them
    /// into a URL.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            QueryOperation::PopularStations { .. } => vec!["json", "stations", "topvote"],
            QueryOperation::SearchStations(_) => vec!["json", "stations", "search"],
            QueryOperation::ListCountries => vec!["json", "countries"],
            QueryOperation::RegisterClick { station_id } => {
                vec!["json", "url", station_id.as_str()]
            }
        }
    }

    /// Query parameters sent upstream.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            QueryOperation::PopularStations { limit } => vec![
                ("limit", limit.to_string()),
                ("hidebroken", "true".to_string()),
            ],
            QueryOperation::SearchStations(search) => {
                let mut params = vec![
                    ("limit", search.limit.to_string()),
                    ("hidebroken", "true".to_string()),
                ];
                if let Some(name) = &search.name {
                    params.push(("name", name.clone()));
                }
                if let Some(country) = &search.country {
                    params.push(("country", country.clone()));
                }
                params
            }
            QueryOperation::ListCountries => vec![("hidebroken", "true".to_string())],
            QueryOperation::RegisterClick { .. } => Vec::new(),
        }
    }
}
