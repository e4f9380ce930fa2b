use std::collections::BTreeMap;

use hcp_model::Iso3;

use crate::{NormalizeError, Result};

/// The canonical country list: ISO3 code plus UN official display name.
///
/// Compiled into the binary so a pipeline run never depends on external
/// reference files. Loaded once at pipeline start and passed by reference
/// into the normalizer.
const COUNTRIES_CSV: &str = include_str!("../data/countries.csv");

/// Lookup key normalization shared by every name comparison in the crate:
/// trim, strip BOM, collapse internal whitespace, fold curly apostrophes,
/// uppercase.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut key = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        key.push_str(first);
        for part in parts {
            key.push(' ');
            key.push_str(part);
        }
    }
    key.replace(['\u{2019}', '\u{2018}'], "'").to_uppercase()
}

#[derive(Debug, Clone)]
pub struct CountryIndex {
    by_key: BTreeMap<String, Iso3>,
    by_iso3: BTreeMap<Iso3, String>,
}

impl CountryIndex {
    /// Parse the embedded `countries.csv` asset.
    pub fn load_embedded() -> Result<Self> {
        Self::parse(COUNTRIES_CSV)
    }

    fn parse(text: &str) -> Result<Self> {
        let mut by_key = BTreeMap::new();
        let mut by_iso3 = BTreeMap::new();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        for record in reader.records() {
            let record =
                record.map_err(|error| NormalizeError::CountryList(error.to_string()))?;
            let code = record.get(0).unwrap_or_default();
            let name = record.get(1).unwrap_or_default().trim();
            if name.is_empty() {
                return Err(NormalizeError::CountryList(format!(
                    "missing name for code {code:?}"
                )));
            }
            let iso3 = Iso3::new(code)
                .map_err(|error| NormalizeError::CountryList(error.to_string()))?;
            if by_iso3.insert(iso3.clone(), name.to_string()).is_some() {
                return Err(NormalizeError::CountryList(format!(
                    "duplicate ISO3 code {iso3}"
                )));
            }
            if by_key.insert(normalize_key(name), iso3).is_some() {
                return Err(NormalizeError::CountryList(format!(
                    "duplicate country name {name:?}"
                )));
            }
        }
        Ok(Self { by_key, by_iso3 })
    }

    /// Exact lookup of a normalized name key.
    pub fn iso3_for_key(&self, key: &str) -> Option<&Iso3> {
        self.by_key.get(key)
    }

    /// Canonical display name for an ISO3 code.
    pub fn display_name(&self, iso3: &Iso3) -> Option<&str> {
        self.by_iso3.get(iso3).map(String::as_str)
    }

    pub fn contains(&self, iso3: &Iso3) -> bool {
        self.by_iso3.contains_key(iso3)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Iso3, &str)> {
        self.by_iso3.iter().map(|(iso3, name)| (iso3, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_iso3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_iso3.is_empty()
    }
}
