//! Property tests: resolution and filtering are deterministic pure
//! functions of their input, and key normalization is idempotent.

use hcp_normalize::{AggregateFilter, CountryIndex, NameNormalizer, normalize_key};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_key_is_idempotent(raw in ".{0,64}") {
        let once = normalize_key(&raw);
        let twice = normalize_key(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resolve_is_deterministic(raw in ".{0,64}") {
        let index = CountryIndex::load_embedded().expect("embedded list");
        let normalizer = NameNormalizer::new(&index).expect("normalizer");
        prop_assert_eq!(normalizer.resolve(&raw), normalizer.resolve(&raw));
    }

    #[test]
    fn classify_is_deterministic(raw in ".{0,64}") {
        let filter = AggregateFilter::new().expect("patterns compile");
        prop_assert_eq!(filter.classify(&raw), filter.classify(&raw));
    }
}
