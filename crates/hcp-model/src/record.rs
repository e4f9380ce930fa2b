use serde::{Deserialize, Serialize};

use crate::{Iso3, TrackStatus};

/// One row of the merged analysis table.
///
/// A record exists only for countries present in all three sources, so the
/// track status is always known; indicator values stay optional because the
/// join key is ISO3 presence, not value completeness. `None` means "no data",
/// never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub iso3: Iso3,
    /// Canonical display name from the embedded country list.
    pub country: String,
    pub status: TrackStatus,
    /// Share of pregnant women with four or more antenatal care visits (%).
    pub anc4: Option<f64>,
    /// Share of births attended by skilled health personnel (%).
    pub sba: Option<f64>,
    /// Projected 2022 births, in thousands.
    pub births_thousands: Option<f64>,
}
