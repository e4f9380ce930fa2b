use std::collections::BTreeSet;

use regex::RegexSetBuilder;
use tracing::trace;

use crate::Result;
use crate::country_index::normalize_key;

/// Substring/pattern rules identifying non-country rows: regional codes,
/// continents, income groups, development classes. Matched
/// case-insensitively against the raw name. Applied before normalization so
/// an aggregate label can never reach the ISO3 lookup.
pub const AGGREGATE_PATTERNS: &[&str] = &[
    r"\(.*SDGRC.*\)",
    r"Africa$",
    r"Asia$",
    r"Europe$",
    r"America",
    r"World",
    r"Developed",
    r"Developing",
    r"Least developed",
    r"Land.locked",
    r"Small island",
    r"Sub-Saharan",
    r"Northern Africa",
    r"Eastern Africa",
    r"Western Africa",
    r"Middle Africa",
    r"Southern Africa",
    r"Eastern Asia",
    r"South-eastern Asia",
    r"Southern Asia",
    r"Western Asia",
    r"Central Asia",
    r"Eastern Europe",
    r"Northern Europe",
    r"Southern Europe",
    r"Western Europe",
    r"Caribbean",
    r"Central America",
    r"South America",
    r"Northern America",
    r"Oceania",
    r"Polynesia",
    r"Melanesia",
    r"Micronesia",
    r"More developed",
    r"Less developed",
    r"High income",
    r"Upper middle income",
    r"Lower middle income",
    r"Low income",
];

/// Legitimate countries whose names collide with a pattern above. Exact
/// match (after key normalization) overrides the pattern rules.
const WHITELIST: &[&str] = &[
    "South Africa",
    "Central African Republic",
    "United States of America",
    "Micronesia (Federated States of)",
    "Micronesia (Fed. States of)",
];

/// Classification of one raw row name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    IndividualCountry,
    Aggregate,
}

/// Flags rows representing regional/continental aggregates rather than
/// individual countries. An exclusion filter, never a transformation.
#[derive(Debug)]
pub struct AggregateFilter {
    rules: regex::RegexSet,
    whitelist: BTreeSet<String>,
}

impl AggregateFilter {
    pub fn new() -> Result<Self> {
        let rules = RegexSetBuilder::new(AGGREGATE_PATTERNS)
            .case_insensitive(true)
            .build()?;
        let whitelist = WHITELIST.iter().map(|name| normalize_key(name)).collect();
        Ok(Self { rules, whitelist })
    }

    pub fn classify(&self, raw: &str) -> RowClass {
        if self.whitelist.contains(&normalize_key(raw)) {
            return RowClass::IndividualCountry;
        }
        if self.rules.is_match(raw.trim()) {
            trace!(name = raw, "aggregate row");
            return RowClass::Aggregate;
        }
        RowClass::IndividualCountry
    }

    pub fn is_aggregate(&self, raw: &str) -> bool {
        self.classify(raw) == RowClass::Aggregate
    }
}
