use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("header row not found in {path}: no cell matches {marker:?} in the first {scanned} rows")]
    HeaderNotFound {
        path: PathBuf,
        marker: String,
        scanned: usize,
    },

    #[error("missing expected column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: String },
}

impl IngestError {
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
