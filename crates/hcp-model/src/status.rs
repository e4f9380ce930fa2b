use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Binary classification of a country's progress toward the under-five
/// mortality reduction target.
///
/// Raw status values from the classification source ("Achieved",
/// "Acceleration Needed", ...) are mapped to this enum by the track-status
/// extractor; this type only knows the two output buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackStatus {
    #[serde(rename = "on-track")]
    OnTrack,
    #[serde(rename = "off-track")]
    OffTrack,
}

impl TrackStatus {
    /// Returns the label written to the merged output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackStatus::OnTrack => "on-track",
            TrackStatus::OffTrack => "off-track",
        }
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on-track" | "on track" => Ok(TrackStatus::OnTrack),
            "off-track" | "off track" => Ok(TrackStatus::OffTrack),
            _ => Err(ModelError::InvalidStatus(value.to_string())),
        }
    }
}
