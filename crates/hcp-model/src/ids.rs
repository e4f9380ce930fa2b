use std::fmt;

use crate::ModelError;

/// Canonical country identifier: exactly three ASCII uppercase letters.
///
/// This is the join key for the whole pipeline; every source table is keyed
/// by it after normalization.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Iso3(String);

impl Iso3 {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 3 || !trimmed.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ModelError::InvalidIso3(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iso3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
