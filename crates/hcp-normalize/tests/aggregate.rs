//! Aggregate-filter rules: regional labels are dropped, whitelisted
//! countries survive.

use hcp_normalize::{AggregateFilter, CountryIndex, RowClass};

#[test]
fn continents_and_regions_are_aggregates() {
    let filter = AggregateFilter::new().expect("patterns compile");
    for name in [
        "Africa",
        "Sub-Saharan Africa",
        "Eastern Africa",
        "South-eastern Asia",
        "Western Europe",
        "Latin America and the Caribbean",
        "World",
        "Oceania",
        "Polynesia",
        "Least developed countries",
        "Land-locked developing countries",
        "Small island developing States",
        "High income",
        "Lower middle income",
        "Europe and Northern America (SDGRC)",
    ] {
        assert_eq!(filter.classify(name), RowClass::Aggregate, "name {name:?}");
    }
}

#[test]
fn whitelisted_countries_override_pattern_rules() {
    let filter = AggregateFilter::new().expect("patterns compile");
    for name in [
        "South Africa",
        "Central African Republic",
        "United States of America",
        "Micronesia (Federated States of)",
        "Micronesia (Fed. States of)",
    ] {
        assert_eq!(
            filter.classify(name),
            RowClass::IndividualCountry,
            "name {name:?}"
        );
    }
    // The bare region name is still an aggregate.
    assert_eq!(filter.classify("Micronesia"), RowClass::Aggregate);
}

#[test]
fn ordinary_countries_pass_through() {
    let filter = AggregateFilter::new().expect("patterns compile");
    for name in ["Kenya", "Malaysia", "Indonesia", "Panama", "Australia"] {
        assert_eq!(
            filter.classify(name),
            RowClass::IndividualCountry,
            "name {name:?}"
        );
    }
}

#[test]
fn no_canonical_country_is_misclassified() {
    // Every name on the canonical list must survive the filter, otherwise a
    // real country could silently vanish upstream of normalization.
    let filter = AggregateFilter::new().expect("patterns compile");
    let index = CountryIndex::load_embedded().expect("embedded list");
    for (iso3, name) in index.iter() {
        assert_eq!(
            filter.classify(name),
            RowClass::IndividualCountry,
            "{iso3} {name:?} was classified as an aggregate"
        );
    }
}
