//! Built-in station directory used when every mirror is unreachable.
//!
//! The corpus is small and hand-curated: enough well-known stations to keep
//! the popular list, searches and country browsing useful while offline.
//! Station identifiers carry [`SYNTHETIC_ID_PREFIX`] so that consumers can
//! tell corpus data apart from upstream data.

use crate::domain::{CountryRecord, QueryOperation, StationRecord};

/// Prefix of every fallback station identifier.
pub const SYNTHETIC_ID_PREFIX: &str = "sample-uuid-";

/// Static description of a fallback station.
struct SampleStation {
    suffix: &'static str,
    name: &'static str,
    url: &'static str,
    country: &'static str,
    tags: &'static str,
    votes: u64,
    bitrate: u32,
}

impl SampleStation {
    fn to_record(&self) -> StationRecord {
        StationRecord::new(
            format!("{SYNTHETIC_ID_PREFIX}{}", self.suffix),
            self.name,
            self.url,
        )
        .with_country(self.country)
        .with_tags(self.tags)
        .with_votes(self.votes)
        .with_audio("MP3", self.bitrate)
    }
}

const STATIONS: &[SampleStation] = &[
    SampleStation {
        suffix: "1",
        name: "BBC World Service",
        url: "http://stream.live.vc.bbcmedia.co.uk/bbc_world_service",
        country: "United Kingdom",
        tags: "news,talk,english",
        votes: 12345,
        bitrate: 128,
    },
    SampleStation {
        suffix: "2",
        name: "Radio France Inter",
        url: "http://icecast.radiofrance.fr/franceinter-midfi.mp3",
        country: "France",
        tags: "news,talk,french",
        votes: 8765,
        bitrate: 128,
    },
    SampleStation {
        suffix: "3",
        name: "NPR News",
        url: "http://npr-ice.streamguys1.com/live.mp3",
        country: "United States",
        tags: "news,talk,english",
        votes: 15432,
        bitrate: 128,
    },
    SampleStation {
        suffix: "4",
        name: "Deutsche Welle",
        url: "http://dw.audiostream.io/dw/1001/mp3/64/stream.mp3",
        country: "Germany",
        tags: "news,international,english",
        votes: 9876,
        bitrate: 64,
    },
    SampleStation {
        suffix: "5",
        name: "WNYC FM",
        url: "http://fm939.wnyc.org/wnycfm-web",
        country: "United States",
        tags: "talk,news,culture",
        votes: 8543,
        bitrate: 128,
    },
    SampleStation {
        suffix: "6",
        name: "Radio Nederland",
        url: "http://icecast.omroep.nl/radio1-bb-mp3",
        country: "Netherlands",
        tags: "news,talk,dutch",
        votes: 7654,
        bitrate: 128,
    },
    SampleStation {
        suffix: "7",
        name: "Jazz FM",
        url: "http://jazz-wr04.ice.infomaniak.ch/jazz-wr04-128.mp3",
        country: "Switzerland",
        tags: "jazz,music",
        votes: 6789,
        bitrate: 128,
    },
    SampleStation {
        suffix: "8",
        name: "KCRW",
        url: "http://kcrw.streamguys1.com/kcrw_192k_mp3_e24",
        country: "United States",
        tags: "eclectic,music,culture",
        votes: 9123,
        bitrate: 192,
    },
    SampleStation {
        suffix: "9",
        name: "ABC Radio National",
        url: "http://live-radio02.mediahubaustralia.com/2RNW/mp3/",
        country: "Australia",
        tags: "news,talk,culture",
        votes: 5432,
        bitrate: 128,
    },
    SampleStation {
        suffix: "10",
        name: "CBC Radio One",
        url: "http://cbc_r1_tor.akacast.akamaistream.net/7/440/451661/v1/rc.akacast.akamaistream.net/cbc_r1_tor",
        country: "Canada",
        tags: "news,talk,canadian",
        votes: 7890,
        bitrate: 128,
    },
    SampleStation {
        suffix: "11",
        name: "Radio Swiss Pop",
        url: "http://stream.srg-ssr.ch/rsp/mp3_128.m3u",
        country: "Switzerland",
        tags: "pop,music",
        votes: 4567,
        bitrate: 128,
    },
    SampleStation {
        suffix: "12",
        name: "NRK P1",
        url: "http://lyd.nrk.no/nrk_radio_p1_ostlandssendingen_mp3_h",
        country: "Norway",
        tags: "news,talk,norwegian",
        votes: 3456,
        bitrate: 192,
    },
    SampleStation {
        suffix: "13",
        name: "Classic FM",
        url: "http://media-ice.musicradio.com/ClassicFMMP3",
        country: "United Kingdom",
        tags: "classical,music",
        votes: 8901,
        bitrate: 128,
    },
    SampleStation {
        suffix: "14",
        name: "Radio Maria",
        url: "http://dreamsiteradiocp2.com:8002/stream",
        country: "Italy",
        tags: "religious,italian",
        votes: 2345,
        bitrate: 128,
    },
    SampleStation {
        suffix: "15",
        name: "Radio Sweden",
        url: "http://sverigesradio.se/topsy/direkt/132-hi-mp3.m3u",
        country: "Sweden",
        tags: "news,talk,swedish",
        votes: 5678,
        bitrate: 128,
    },
    SampleStation {
        suffix: "16",
        name: "Smooth Jazz",
        url: "http://player.smoothjazz.com/",
        country: "United States",
        tags: "jazz,smooth,instrumental",
        votes: 6543,
        bitrate: 128,
    },
    SampleStation {
        suffix: "17",
        name: "FIP",
        url: "http://icecast.radiofrance.fr/fip-midfi.mp3",
        country: "France",
        tags: "eclectic,music,french",
        votes: 7432,
        bitrate: 128,
    },
    SampleStation {
        suffix: "18",
        name: "Radio 4",
        url: "http://bbcmedia.ic.llnwd.net/stream/bbcmedia_radio4fm_mf_p",
        country: "United Kingdom",
        tags: "talk,drama,culture",
        votes: 9876,
        bitrate: 128,
    },
    SampleStation {
        suffix: "19",
        name: "WDR 2",
        url: "http://wdr-wdr2-ruhrgebiet.icecast.wdr.de/wdr/wdr2/ruhrgebiet/mp3/128/stream.mp3",
        country: "Germany",
        tags: "pop,german,regional",
        votes: 4321,
        bitrate: 128,
    },
    SampleStation {
        suffix: "20",
        name: "Triple J",
        url: "http://live-radio01.mediahubaustralia.com/2TJW/mp3/",
        country: "Australia",
        tags: "alternative,rock,youth",
        votes: 8765,
        bitrate: 128,
    },
];

const COUNTRIES: &[(&str, u64)] = &[
    ("United States", 2500),
    ("Germany", 1200),
    ("United Kingdom", 800),
    ("France", 600),
    ("Canada", 400),
    ("Australia", 350),
    ("Netherlands", 300),
    ("Italy", 280),
    ("Spain", 250),
    ("Sweden", 200),
    ("Norway", 180),
    ("Switzerland", 150),
    ("Austria", 120),
    ("Belgium", 100),
    ("Denmark", 90),
];

/// Fallback data for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackSample {
    Stations(Vec<StationRecord>),
    Countries(Vec<CountryRecord>),
    /// The operation has no offline counterpart (click registration).
    Empty,
}

impl FallbackSample {
    /// The stations of this sample, or nothing for a non-station sample.
    pub fn into_stations(self) -> Vec<StationRecord> {
        match self {
            FallbackSample::Stations(stations) => stations,
            _ => Vec::new(),
        }
    }

    /// The countries of this sample, or nothing for a non-country sample.
    pub fn into_countries(self) -> Vec<CountryRecord> {
        match self {
            FallbackSample::Countries(countries) => countries,
            _ => Vec::new(),
        }
    }
}

/// Fallback data for an operation, chosen by its category only.
pub fn sample(operation: &QueryOperation) -> FallbackSample {
    match operation {
        QueryOperation::PopularStations { .. } | QueryOperation::SearchStations(_) => {
            FallbackSample::Stations(sample_stations())
        }
        QueryOperation::ListCountries => FallbackSample::Countries(sample_countries()),
        QueryOperation::RegisterClick { .. } => FallbackSample::Empty,
    }
}

/// A fresh copy of every fallback station, in corpus order.
pub fn sample_stations() -> Vec<StationRecord> {
    STATIONS.iter().map(SampleStation::to_record).collect()
}

/// A fresh copy of every fallback country, in corpus order.
pub fn sample_countries() -> Vec<CountryRecord> {
    COUNTRIES
        .iter()
        .map(|&(name, count)| CountryRecord::new(name, count))
        .collect()
}

/// Whether an identifier was allocated by the fallback corpus.
///
/// Only a hint for consumers of serialized records; inside this crate
/// provenance is carried explicitly on [`crate::domain::LookupOutcome`].
pub fn is_synthetic_id(id: &str) -> bool {
    id.starts_with(SYNTHETIC_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationSearch;
    use std::collections::HashSet;

    #[test]
    fn popular_sample_is_synthetic() {
        let FallbackSample::Stations(stations) =
            sample(&QueryOperation::PopularStations { limit: 3 })
        else {
            panic!("expected stations");
        };

        assert!(!stations.is_empty());
        assert!(stations.iter().all(|s| is_synthetic_id(s.id())));
    }

    #[test]
    fn search_uses_station_corpus() {
        let op = QueryOperation::SearchStations(StationSearch::new(10));
        assert_eq!(sample(&op), FallbackSample::Stations(sample_stations()));
    }

    #[test]
    fn countries_sample() {
        let FallbackSample::Countries(countries) = sample(&QueryOperation::ListCountries) else {
            panic!("expected countries");
        };

        assert_eq!(countries.len(), 15);
        assert_eq!(countries[0].name(), "United States");
        assert_eq!(countries[0].station_count(), 2500);
    }

    #[test]
    fn click_has_no_sample() {
        let op = QueryOperation::RegisterClick {
            station_id: "x".into(),
        };
        assert_eq!(sample(&op), FallbackSample::Empty);
    }

    #[test]
    fn mismatched_extraction_is_empty() {
        assert!(sample(&QueryOperation::ListCountries).into_stations().is_empty());
        assert!(
            sample(&QueryOperation::PopularStations { limit: 1 })
                .into_countries()
                .is_empty()
        );
    }

    #[test]
    fn samples_are_deterministic() {
        assert_eq!(sample_stations(), sample_stations());
        assert_eq!(sample_countries(), sample_countries());
    }

    #[test]
    fn station_ids_are_unique() {
        let stations = sample_stations();
        let ids: HashSet<_> = stations.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), stations.len());
    }

    #[test]
    fn every_station_country_is_listed() {
        let countries: HashSet<_> = COUNTRIES.iter().map(|&(name, _)| name).collect();
        for station in STATIONS {
            assert!(
                countries.contains(station.country),
                "{} has unlisted country {}",
                station.name,
                station.country
            );
        }
    }

    #[test]
    fn upstream_style_ids_are_not_synthetic() {
        assert!(!is_synthetic_id("96062a7b-0601-11e8-ae97-52543be04c81"));
        assert!(is_synthetic_id("sample-uuid-7"));
    }
}
