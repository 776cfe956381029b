//! Domain types for the radio directory.
//!
//! Records carry the upstream wire format's field names so that mirror
//! responses can be forwarded without reshaping. Query operations describe
//! both the upstream request and the local filter applied to fallback data.

mod outcome;
mod query;
mod record;

pub use outcome::{ClickReceipt, LookupOutcome, Provenance};
pub use query::{OperationWeight, QueryOperation, StationSearch};
pub use record::{CountryRecord, StationRecord};
