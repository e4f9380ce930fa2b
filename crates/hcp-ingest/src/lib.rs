#![deny(unsafe_code)]

pub mod error;
pub mod numeric;
pub mod raw_table;

pub use error::{IngestError, Result};
pub use numeric::{parse_numeric, parse_year};
pub use raw_table::{
    DEFAULT_HEADER_SCAN_LIMIT, RawTable, cell, read_raw_table, read_raw_table_at_marker,
};
