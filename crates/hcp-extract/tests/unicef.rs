//! Extractor A: indicator filtering, year window, tie-breaks and the pivot.

use std::path::PathBuf;

use hcp_extract::extract_indicators;
use hcp_model::Iso3;
use hcp_normalize::{AggregateFilter, CountryIndex, NameNormalizer};

const ANC4: &str = "Antenatal care 4+ visits - percentage of women (aged 15-49 years) attended at least four times during pregnancy by any provider";
const SBA: &str = "Skilled birth attendant - percentage of deliveries attended by skilled health personnel";

fn write_fixture(rows: &[(&str, &str, &str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unicef_indicators.csv");
    let mut content = String::from("Geographic area,Indicator,Sex,TIME_PERIOD,OBS_VALUE\n");
    for (area, indicator, year, value) in rows {
        content.push_str(&format!("{area},\"{indicator}\",Total,{year},{value}\n"));
    }
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}

fn iso3(code: &str) -> Iso3 {
    Iso3::new(code).expect("valid iso3")
}

#[test]
fn pivots_both_indicators_into_one_row_per_country() {
    let (_dir, path) = write_fixture(&[
        ("Ghana", ANC4, "2020", "87.3"),
        ("Ghana", SBA, "2020", "79.4"),
        ("Kenya", SBA, "2019", "70.2"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.kept, 2);

    let ghana = extract.table.get(&iso3("GHA")).expect("ghana");
    assert_eq!(ghana.value.anc4, Some(87.3));
    assert_eq!(ghana.value.sba, Some(79.4));

    let kenya = extract.table.get(&iso3("KEN")).expect("kenya");
    assert_eq!(kenya.value.anc4, None);
    assert_eq!(kenya.value.sba, Some(70.2));
}

#[test]
fn most_recent_year_wins() {
    let (_dir, path) = write_fixture(&[
        ("Ghana", ANC4, "2021", "90.0"),
        ("Ghana", ANC4, "2018", "80.0"),
        ("Ghana", ANC4, "2019", "85.0"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    let ghana = extract.table.get(&iso3("GHA")).expect("ghana");
    assert_eq!(ghana.value.anc4, Some(90.0));
    // A plain multi-year series is one name repeating, not a duplicate.
    assert_eq!(extract.counts.duplicates_dropped, 0);
}

#[test]
fn name_variants_collapsing_onto_one_country_are_counted() {
    // Canonical and alias spellings of the same country compete on year like
    // any other rows; the losing variant must show up in the counts.
    let (_dir, path) = write_fixture(&[
        ("T\u{fc}rkiye", ANC4, "2020", "90.0"),
        ("Turkey", ANC4, "2022", "10.0"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    let turkey = extract.table.get(&iso3("TUR")).expect("turkey");
    assert_eq!(turkey.value.anc4, Some(10.0));
    assert_eq!(extract.counts.duplicates_dropped, 1);
    assert_eq!(extract.counts.kept, 1);
}

#[test]
fn same_year_ties_go_to_the_last_encountered_row() {
    let (_dir, path) = write_fixture(&[
        ("Ghana", ANC4, "2020", "70.0"),
        ("Ghana", ANC4, "2020", "75.0"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    let ghana = extract.table.get(&iso3("GHA")).expect("ghana");
    assert_eq!(ghana.value.anc4, Some(75.0));
}

#[test]
fn out_of_window_years_and_other_indicators_are_out_of_scope() {
    let (_dir, path) = write_fixture(&[
        ("Ghana", ANC4, "2017", "60.0"),
        ("Ghana", ANC4, "2023", "95.0"),
        ("Ghana", "Under-five mortality rate", "2020", "45.1"),
        ("Ghana", ANC4, "2020", "87.3"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.out_of_scope, 3);
    let ghana = extract.table.get(&iso3("GHA")).expect("ghana");
    assert_eq!(ghana.value.anc4, Some(87.3));
}

#[test]
fn aggregates_are_dropped_before_normalization() {
    let (_dir, path) = write_fixture(&[
        ("Sub-Saharan Africa", ANC4, "2020", "55.0"),
        ("World", SBA, "2020", "82.0"),
        ("Ghana", ANC4, "2020", "87.3"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.aggregate_excluded, 2);
    assert_eq!(extract.counts.kept, 1);
}

#[test]
fn unmatched_names_are_counted_and_dropped() {
    let (_dir, path) = write_fixture(&[
        ("Narnia", ANC4, "2020", "87.3"),
        ("Kenya", SBA, "2019", "70.2"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.unmatched_names, 1);
    assert_eq!(extract.counts.kept, 1);
}

#[test]
fn missing_observation_value_stays_missing() {
    let (_dir, path) = write_fixture(&[("Kenya", ANC4, "2020", "")]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_indicators(&path, &normalizer, &filter).expect("extract");
    let kenya = extract.table.get(&iso3("KEN")).expect("kenya");
    assert_eq!(kenya.value.anc4, None);
}
