use std::path::PathBuf;

use hcp_ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A classification value outside the expected enumeration. Fatal: the
    /// source is telling us something its schema did not promise, so it must
    /// not be coerced into a default bucket.
    #[error("unrecognized status value {value:?} for {country:?} in {path}")]
    UnrecognizedCategory {
        path: PathBuf,
        country: String,
        value: String,
    },

    #[error("invalid ISO3 code {value:?} for {country:?} in {path}")]
    InvalidIso3 {
        path: PathBuf,
        country: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
