#![deny(unsafe_code)]

pub mod aggregate;
pub mod aliases;
pub mod country_index;
pub mod error;
pub mod normalizer;

pub use aggregate::{AGGREGATE_PATTERNS, AggregateFilter, RowClass};
pub use country_index::{CountryIndex, normalize_key};
pub use error::{NormalizeError, Result};
pub use normalizer::{NameMatch, NameNormalizer};
