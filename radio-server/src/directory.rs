//! Station directory with offline fallback.
//!
//! Every lookup goes to the mirrors first. When all of them fail, the
//! built-in corpus stands in: popular stations are capped to the requested
//! limit, searches are re-evaluated locally, and click registration is
//! reported as successful regardless.
//!
//! Results served by a mirror are passed through as-is. The mirror has
//! already applied the search filters and limit on its side.

use crate::domain::{
    ClickReceipt, CountryRecord, LookupOutcome, QueryOperation, StationRecord, StationSearch,
};
use crate::fallback;
use crate::filter;
use crate::mirror::MirrorClient;

/// Response to any directory operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryResponse {
    Stations(LookupOutcome<StationRecord>),
    Countries(LookupOutcome<CountryRecord>),
    Click(ClickReceipt),
}

/// Facade over the mirror client and the fallback corpus.
///
/// Holds no per-request state; clones share the underlying client.
#[derive(Debug, Clone)]
pub struct Directory {
    mirrors: MirrorClient,
}

impl Directory {
    pub fn new(mirrors: MirrorClient) -> Self {
        Self { mirrors }
    }

    /// Run any operation.
    pub async fn lookup(&self, operation: QueryOperation) -> DirectoryResponse {
        match operation {
            QueryOperation::PopularStations { limit } => {
                DirectoryResponse::Stations(self.popular_stations(limit).await)
            }
            QueryOperation::SearchStations(search) => {
                DirectoryResponse::Stations(self.search_stations(&search).await)
            }
            QueryOperation::ListCountries => DirectoryResponse::Countries(self.countries().await),
            QueryOperation::RegisterClick { station_id } => {
                DirectoryResponse::Click(self.register_click(&station_id).await)
            }
        }
    }

    /// Most-voted stations.
    pub async fn popular_stations(&self, limit: usize) -> LookupOutcome<StationRecord> {
        let operation = QueryOperation::PopularStations { limit };
        self.fetch_or_else(&operation, |sample| {
            let mut stations = sample.into_stations();
            stations.truncate(limit);
            stations
        })
        .await
    }

    /// Stations matching the search's name and country filters.
    pub async fn search_stations(&self, search: &StationSearch) -> LookupOutcome<StationRecord> {
        let operation = QueryOperation::SearchStations(search.clone());
        self.fetch_or_else(&operation, |sample| {
            filter::apply_search(sample.into_stations(), search)
        })
        .await
    }

    /// Countries with their station counts.
    pub async fn countries(&self) -> LookupOutcome<CountryRecord> {
        self.fetch_or_else(&QueryOperation::ListCountries, |sample| {
            sample.into_countries()
        })
        .await
    }

    /// Register a station click. Always reports success.
    pub async fn register_click(&self, station_id: &str) -> ClickReceipt {
        let accepted = self.mirrors.register_click(station_id).await;
        ClickReceipt::new(accepted.map(|mirror| mirror.to_string()))
    }

    /// Fetch from the mirrors, or build the result from the fallback sample.
    async fn fetch_or_else<T, F>(
        &self,
        operation: &QueryOperation,
        substitute: F,
    ) -> LookupOutcome<T>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(fallback::FallbackSample) -> Vec<T>,
    {
        match self.mirrors.fetch::<T>(operation).await {
            Some(fetched) => LookupOutcome::upstream(fetched.records, fetched.mirror.to_string()),
            None => LookupOutcome::fallback(substitute(fallback::sample(operation))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provenance;
    use crate::fallback::is_synthetic_id;
    use crate::mirror::MirrorConfig;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const UNREACHABLE: &str = "http://127.0.0.1:1";

    fn directory(primary: Vec<String>) -> Directory {
        let config = MirrorConfig::new()
            .with_primary(primary)
            .with_alternative([UNREACHABLE])
            .with_read_timeout(1)
            .with_click_timeout(1);
        Directory::new(MirrorClient::new(config).unwrap())
    }

    fn offline() -> Directory {
        directory(vec![UNREACHABLE.to_string()])
    }

    fn upstream_stations(count: usize) -> serde_json::Value {
        let stations: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "stationuuid": format!("upstream-{i}"),
                    "name": format!("Upstream {i}"),
                    "url": "http://stream.example",
                    "country": "Germany",
                    "votes": 100 - i,
                })
            })
            .collect();
        json!(stations)
    }

    async fn serving(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn names(outcome: &LookupOutcome<StationRecord>) -> Vec<&str> {
        outcome.records().iter().map(|s| s.name()).collect()
    }

    #[tokio::test]
    async fn offline_popular_is_capped_sample() {
        let outcome = offline().popular_stations(3).await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.len(), 3);
        assert!(outcome.records().iter().all(|s| is_synthetic_id(s.id())));
        assert_eq!(outcome.records()[0].name(), "BBC World Service");
    }

    #[tokio::test]
    async fn offline_search_filters_by_name() {
        let search = StationSearch::new(10).with_name(Some("jazz"));
        let outcome = offline().search_stations(&search).await;

        assert!(outcome.is_fallback());
        assert_eq!(names(&outcome), vec!["Jazz FM", "Smooth Jazz"]);
    }

    #[tokio::test]
    async fn offline_search_filters_by_country() {
        let search = StationSearch::new(10).with_country(Some("france"));
        let outcome = offline().search_stations(&search).await;

        assert_eq!(names(&outcome), vec!["Radio France Inter", "FIP"]);
    }

    #[tokio::test]
    async fn offline_search_respects_limit() {
        let search = StationSearch::new(2).with_country(Some("United States"));
        let outcome = offline().search_stations(&search).await;

        assert_eq!(names(&outcome), vec!["NPR News", "WNYC FM"]);
    }

    #[tokio::test]
    async fn offline_countries() {
        let outcome = offline().countries().await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.len(), 15);
    }

    #[tokio::test]
    async fn offline_click_still_succeeds() {
        let receipt = offline().register_click("96062a7b-0601-11e8-ae97-52543be04c81").await;

        assert!(receipt.success);
        assert_eq!(receipt.acknowledged_by, None);
    }

    #[tokio::test]
    async fn upstream_popular_is_not_recapped() {
        let server = serving(upstream_stations(5)).await;
        let outcome = directory(vec![server.uri()]).popular_stations(3).await;

        assert_eq!(
            outcome.provenance(),
            &Provenance::Upstream {
                mirror: server.uri()
            }
        );
        assert_eq!(outcome.len(), 5);
        assert_eq!(outcome.records()[4].id(), "upstream-4");
    }

    #[tokio::test]
    async fn upstream_search_is_not_refiltered() {
        let server = serving(upstream_stations(2)).await;
        let search = StationSearch::new(10).with_name(Some("jazz"));
        let outcome = directory(vec![server.uri()]).search_stations(&search).await;

        assert!(!outcome.is_fallback());
        assert_eq!(names(&outcome), vec!["Upstream 0", "Upstream 1"]);
    }

    #[tokio::test]
    async fn upstream_ids_with_sample_prefix_stay_upstream() {
        let server = serving(json!([{
            "stationuuid": "sample-uuid-1",
            "name": "Real Station",
            "country": "Italy"
        }]))
        .await;
        let search = StationSearch::new(10).with_name(Some("jazz"));
        let outcome = directory(vec![server.uri()]).search_stations(&search).await;

        assert!(!outcome.is_fallback());
        assert_eq!(names(&outcome), vec!["Real Station"]);
    }

    #[tokio::test]
    async fn click_acknowledged_by_mirror() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = directory(vec![server.uri()]).register_click("abc").await;

        assert!(receipt.success);
        assert_eq!(receipt.acknowledged_by, Some(server.uri()));
    }

    #[tokio::test]
    async fn lookup_dispatches_by_operation() {
        let dir = offline();

        let DirectoryResponse::Stations(stations) =
            dir.lookup(QueryOperation::PopularStations { limit: 2 }).await
        else {
            panic!("expected stations");
        };
        assert_eq!(stations.len(), 2);

        let DirectoryResponse::Countries(countries) = dir.lookup(QueryOperation::ListCountries).await
        else {
            panic!("expected countries");
        };
        assert!(countries.is_fallback());

        let response = dir
            .lookup(QueryOperation::RegisterClick {
                station_id: "abc".into(),
            })
            .await;
        assert_eq!(response, DirectoryResponse::Click(ClickReceipt::new(None)));
    }
}
