use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid ISO3 code: {0:?}")]
    InvalidIso3(String),

    #[error("invalid track status: {0:?}")]
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
