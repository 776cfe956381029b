//! Lookup results tagged with where their records came from.

use serde::Serialize;

/// Origin of a set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Served by an upstream mirror.
    Upstream { mirror: String },
    /// Substituted from the built-in fallback corpus.
    Fallback,
}

impl Provenance {
    /// Short label suitable for headers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Upstream { .. } => "upstream",
            Provenance::Fallback => "fallback",
        }
    }
}

/// Records returned by a directory lookup.
///
/// Any filtering happens before the outcome is built; the records are
/// handed over by value and never touched again by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome<T> {
    records: Vec<T>,
    provenance: Provenance,
}

impl<T> LookupOutcome<T> {
    pub fn upstream(records: Vec<T>, mirror: impl Into<String>) -> Self {
        Self {
            records,
            provenance: Provenance::Upstream {
                mirror: mirror.into(),
            },
        }
    }

    pub fn fallback(records: Vec<T>) -> Self {
        Self {
            records,
            provenance: Provenance::Fallback,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Result of a click registration as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickReceipt {
    /// Always `true`: click counting is best-effort.
    pub success: bool,
    /// Mirror that accepted the click, if any did.
    #[serde(skip)]
    pub acknowledged_by: Option<String>,
}

impl ClickReceipt {
    pub fn new(acknowledged_by: Option<String>) -> Self {
        Self {
            success: true,
            acknowledged_by,
        }
    }
}
