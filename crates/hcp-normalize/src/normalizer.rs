use std::collections::BTreeMap;

use hcp_model::{Iso3, MatchKind};
use tracing::debug;

use crate::aliases::ALIASES;
use crate::country_index::{CountryIndex, normalize_key};
use crate::{NormalizeError, Result};

/// Result of resolving one raw country name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Matched the canonical country list directly.
    Exact(Iso3),
    /// Matched through the curated alias table.
    Alias(Iso3),
    /// No canonical mapping; the caller drops and counts the row.
    Unmatched,
}

impl NameMatch {
    pub fn iso3(&self) -> Option<&Iso3> {
        match self {
            NameMatch::Exact(iso3) | NameMatch::Alias(iso3) => Some(iso3),
            NameMatch::Unmatched => None,
        }
    }

    pub fn kind(&self) -> Option<MatchKind> {
        match self {
            NameMatch::Exact(_) => Some(MatchKind::Exact),
            NameMatch::Alias(_) => Some(MatchKind::Alias),
            NameMatch::Unmatched => None,
        }
    }
}

/// Maps raw country-name strings to canonical ISO3 codes.
///
/// Lookup order: the curated alias table first, then exact match against
/// the canonical country list. A name in neither is `Unmatched`; it is never
/// defaulted. Deterministic for a given country index.
#[derive(Debug)]
pub struct NameNormalizer<'a> {
    index: &'a CountryIndex,
    aliases: BTreeMap<String, Iso3>,
}

impl<'a> NameNormalizer<'a> {
    /// Build the normalizer, validating that every alias targets a code
    /// present in the country list.
    pub fn new(index: &'a CountryIndex) -> Result<Self> {
        let mut aliases = BTreeMap::new();
        for (variant, code) in ALIASES {
            let iso3 = Iso3::new(*code).map_err(|_| NormalizeError::UnknownAliasTarget {
                alias: (*variant).to_string(),
                iso3: (*code).to_string(),
            })?;
            if !index.contains(&iso3) {
                return Err(NormalizeError::UnknownAliasTarget {
                    alias: (*variant).to_string(),
                    iso3: (*code).to_string(),
                });
            }
            aliases.insert(normalize_key(variant), iso3);
        }
        Ok(Self { index, aliases })
    }

    /// Resolve a raw name to its canonical ISO3 code.
    pub fn resolve(&self, raw: &str) -> NameMatch {
        let key = normalize_key(raw);
        if key.is_empty() {
            return NameMatch::Unmatched;
        }
        if let Some(iso3) = self.aliases.get(&key) {
            return NameMatch::Alias(iso3.clone());
        }
        if let Some(iso3) = self.index.iso3_for_key(&key) {
            return NameMatch::Exact(iso3.clone());
        }
        debug!(name = raw, "no canonical mapping for country name");
        NameMatch::Unmatched
    }

    pub fn index(&self) -> &CountryIndex {
        self.index
    }
}
