//! Extractor B: status binarization, fatal categories, duplicate keys.

use std::path::PathBuf;

use hcp_extract::{ExtractError, extract_track_status};
use hcp_model::{Iso3, TrackStatus};
use hcp_normalize::{AggregateFilter, CountryIndex, NameNormalizer};

fn write_fixture(rows: &[(&str, &str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("on_off_track.csv");
    let mut content = String::from("ISO3Code,OfficialName,Status.U5MR\n");
    for (code, name, status) in rows {
        content.push_str(&format!("{code},{name},{status}\n"));
    }
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}

fn iso3(code: &str) -> Iso3 {
    Iso3::new(code).expect("valid iso3")
}

#[test]
fn statuses_binarize_via_the_fixed_mapping() {
    let (_dir, path) = write_fixture(&[
        ("ALB", "Albania", "Achieved"),
        ("ARM", "Armenia", "On Track"),
        ("AFG", "Afghanistan", "Acceleration Needed"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_track_status(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.kept, 3);
    assert_eq!(
        extract.table.get(&iso3("ALB")).map(|k| k.value),
        Some(TrackStatus::OnTrack)
    );
    assert_eq!(
        extract.table.get(&iso3("ARM")).map(|k| k.value),
        Some(TrackStatus::OnTrack)
    );
    assert_eq!(
        extract.table.get(&iso3("AFG")).map(|k| k.value),
        Some(TrackStatus::OffTrack)
    );
}

#[test]
fn unrecognized_status_is_fatal_not_defaulted() {
    let (_dir, path) = write_fixture(&[("ALB", "Albania", "Unknown")]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let error = extract_track_status(&path, &normalizer, &filter).expect_err("must fail");
    match error {
        ExtractError::UnrecognizedCategory { country, value, .. } => {
            assert_eq!(country, "Albania");
            assert_eq!(value, "Unknown");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_iso3_code_is_fatal() {
    let (_dir, path) = write_fixture(&[("AL", "Albania", "Achieved")]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let error = extract_track_status(&path, &normalizer, &filter).expect_err("must fail");
    assert!(matches!(error, ExtractError::InvalidIso3 { .. }));
}

#[test]
fn blank_status_rows_are_skipped_and_counted() {
    let (_dir, path) = write_fixture(&[("ALB", "Albania", ""), ("KEN", "Kenya", "Achieved")]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_track_status(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.skipped_blank, 1);
    assert_eq!(extract.counts.kept, 1);
}

#[test]
fn duplicate_codes_keep_the_first_row() {
    let (_dir, path) = write_fixture(&[
        ("KEN", "Kenya", "Acceleration Needed"),
        ("KEN", "Republic of Kenya", "Achieved"),
    ]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_track_status(&path, &normalizer, &filter).expect("extract");
    assert_eq!(extract.counts.duplicates_dropped, 1);
    assert_eq!(
        extract.table.get(&iso3("KEN")).map(|k| k.value),
        Some(TrackStatus::OffTrack)
    );
}

#[test]
fn codes_outside_the_canonical_list_still_pass_through() {
    // The classification file is the authoritative key source; a valid code
    // the embedded list does not know (e.g. XKX) survives extraction.
    let (_dir, path) = write_fixture(&[("XKX", "Kosovo", "Acceleration Needed")]);
    let index = CountryIndex::load_embedded().expect("index");
    let normalizer = NameNormalizer::new(&index).expect("normalizer");
    let filter = AggregateFilter::new().expect("filter");

    let extract = extract_track_status(&path, &normalizer, &filter).expect("extract");
    assert!(extract.table.contains_key(&iso3("XKX")));
}
