use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::{CountryRecord, Iso3};

/// How a raw country name resolved to its ISO3 code.
///
/// The distinction matters for duplicate resolution: when two raw names in
/// the same source map to one ISO3 code, the exact canonical match is kept
/// over the alias match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// The raw name matched the canonical country list directly.
    Exact,
    /// The raw name went through the curated alias table.
    Alias,
}

/// Outcome of inserting a keyed row into a [`SourceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// An alias-matched row was replaced by an exact-matched row.
    Replaced,
    /// The row lost the duplicate resolution and was dropped.
    Dropped,
}

/// A row held by a [`SourceTable`], remembering where it came from.
#[derive(Debug, Clone)]
pub struct Keyed<T> {
    pub raw_name: String,
    pub kind: MatchKind,
    pub value: T,
}

/// One extracted source dataset, keyed by canonical ISO3 code.
///
/// Created by an extractor, consumed once by the merger. Insertion applies
/// the duplicate policy: exact beats alias, first-encountered wins between
/// rows of equal match kind.
#[derive(Debug, Clone)]
pub struct SourceTable<T> {
    name: String,
    rows: BTreeMap<Iso3, Keyed<T>>,
}

impl<T> SourceTable<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(
        &mut self,
        iso3: Iso3,
        kind: MatchKind,
        raw_name: impl Into<String>,
        value: T,
    ) -> InsertOutcome {
        let keyed = Keyed {
            raw_name: raw_name.into(),
            kind,
            value,
        };
        match self.rows.entry(iso3) {
            Entry::Vacant(slot) => {
                slot.insert(keyed);
                InsertOutcome::Inserted
            }
            Entry::Occupied(mut slot) => {
                if kind == MatchKind::Exact && slot.get().kind == MatchKind::Alias {
                    slot.insert(keyed);
                    InsertOutcome::Replaced
                } else {
                    InsertOutcome::Dropped
                }
            }
        }
    }

    pub fn get(&self, iso3: &Iso3) -> Option<&Keyed<T>> {
        self.rows.get(iso3)
    }

    pub fn contains_key(&self, iso3: &Iso3) -> bool {
        self.rows.contains_key(iso3)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Iso3> {
        self.rows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Iso3, &Keyed<T>)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The final analysis table: one row per country present in all three
/// sources, sorted by ISO3 code so repeated runs produce identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTable {
    rows: Vec<CountryRecord>,
}

impl MergedTable {
    /// Build a merged table from join output. Rows are sorted by ISO3; the
    /// merger guarantees key uniqueness because it iterates a keyed map.
    pub fn from_rows(mut rows: Vec<CountryRecord>) -> Self {
        rows.sort_by(|a, b| a.iso3.cmp(&b.iso3));
        Self { rows }
    }

    pub fn rows(&self) -> &[CountryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
