#![deny(unsafe_code)]

pub mod error;
mod gate;
pub mod status;
pub mod unicef;
pub mod wpp;

pub use error::{ExtractError, Result};
pub use status::{STATUS_SOURCE, StatusExtract, classify_status, extract_track_status};
pub use unicef::{IndicatorValues, UNICEF_SOURCE, UnicefExtract, extract_indicators};
pub use wpp::{BirthsValue, HEADER_MARKER, WPP_SOURCE, WppExtract, extract_births};
