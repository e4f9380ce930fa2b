use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("embedded country list is invalid: {0}")]
    CountryList(String),

    #[error("alias {alias:?} targets ISO3 code {iso3} not present in the country list")]
    UnknownAliasTarget { alias: String, iso3: String },

    #[error("invalid aggregate pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
