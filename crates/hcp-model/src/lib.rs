#![deny(unsafe_code)]

pub mod error;
pub mod ids;
pub mod record;
pub mod status;
pub mod summary;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::Iso3;
pub use record::CountryRecord;
pub use status::TrackStatus;
pub use summary::{MergeSummary, MissingCounts, SourceCounts};
pub use table::{InsertOutcome, Keyed, MatchKind, MergedTable, SourceTable};
