//! Station and country records as served by the directory.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// Radio Browser mirrors occasionally emit `null` for string and numeric
/// fields that are normally present.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single radio station.
///
/// The identifier is only unique within one origin: an upstream mirror and
/// the fallback corpus allocate identifiers independently. Serialized field
/// names follow the upstream wire format so records pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "stationuuid")]
    id: String,
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    url: String,
    #[serde(default, deserialize_with = "nullable")]
    url_resolved: String,
    #[serde(default, deserialize_with = "nullable")]
    country: String,
    #[serde(default, deserialize_with = "nullable")]
    tags: String,
    #[serde(default, deserialize_with = "nullable")]
    votes: u64,
    #[serde(default, deserialize_with = "nullable")]
    bitrate: u32,
    #[serde(default, deserialize_with = "nullable")]
    codec: String,
}

impl StationRecord {
    /// Create a station with an identifier, display name and stream URL.
    ///
    /// The resolved stream URL starts out equal to the stream URL.
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            id: id.into(),
            name: name.into(),
            url_resolved: url.clone(),
            url,
            country: String::new(),
            tags: String::new(),
            votes: 0,
            bitrate: 0,
            codec: String::new(),
        }
    }

    /// Set the country name.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the comma-joined tag list.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the vote count.
    pub fn with_votes(mut self, votes: u64) -> Self {
        self.votes = votes;
        self
    }

    /// Set the codec label and bitrate (kbps).
    pub fn with_audio(mut self, codec: impl Into<String>, bitrate: u32) -> Self {
        self.codec = codec.into();
        self.bitrate = bitrate;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_resolved(&self) -> &str {
        &self.url_resolved
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    pub fn codec(&self) -> &str {
        &self.codec
    }
}

/// A country together with the number of stations it hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    stationcount: u64,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, station_count: u64) -> Self {
        Self {
            name: name.into(),
            stationcount: station_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn station_count(&self) -> u64 {
        self.stationcount
    }
}
