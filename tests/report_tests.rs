//! Report assembly integration tests with a pinned clock and temp assets.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use moonphase::api::PhaseReport;
use moonphase::clock::FixedClock;
use moonphase::config::AssetsConfig;
use moonphase::models::JulianDate;
use moonphase::services::{report_for, tonight_report};
use moonphase::Error;

fn write_assets(dir: &Path) -> AssetsConfig {
    fs::write(dir.join("exclamations.txt"), "Wow!\nBehold!\n").unwrap();
    fs::write(dir.join("quotes.txt"), "We ran as if to meet the moon.\n").unwrap();
    AssetsConfig {
        dir: dir.to_path_buf(),
        exclamations: "exclamations.txt".to_string(),
        quotes: "quotes.txt".to_string(),
    }
}

#[test]
fn test_tonight_report_for_reference_new_moon() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = write_assets(tmp.path());
    let clock = FixedClock(NaiveDate::from_ymd_opt(2000, 1, 5).unwrap());

    let report = tonight_report(&clock, &assets).unwrap();

    assert_eq!(report.phase, "New Moon");
    assert_eq!(report.icon, "new-moon");
    assert!(["Wow!", "Behold!"].contains(&report.exclamation.as_str()));
    assert_eq!(report.quote, "We ran as if to meet the moon.");
    assert_eq!(report.julian_date, 2451550.5);
}

#[test]
fn test_report_for_full_moon_date() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = write_assets(tmp.path());

    let report = report_for(JulianDate::from_civil(1, 25, 2024, 12, 0, 0), &assets).unwrap();

    assert_eq!(report.phase, "Full Moon");
    assert_eq!(report.icon, "full-moon");
}

#[test]
fn test_report_serializes_with_expected_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = write_assets(tmp.path());
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    let report = tonight_report(&clock, &assets).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    for key in ["phase", "icon", "exclamation", "quote", "julian_date"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }

    let back: PhaseReport = serde_json::from_value(json).unwrap();
    assert_eq!(back.phase, report.phase);
}

#[test]
fn test_report_surfaces_missing_asset() {
    let tmp = tempfile::tempdir().unwrap();
    // Quotes file is present; exclamations is not.
    fs::write(tmp.path().join("quotes.txt"), "q\n").unwrap();
    let assets = AssetsConfig {
        dir: tmp.path().to_path_buf(),
        exclamations: "exclamations.txt".to_string(),
        quotes: "quotes.txt".to_string(),
    };
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    let err = tonight_report(&clock, &assets).unwrap_err();
    assert!(matches!(err, Error::MissingAsset { .. }), "got {:?}", err);
}

#[test]
fn test_bundled_assets_are_usable() {
    // The repository ships working default assets.
    let assets = AssetsConfig::default();
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 24).unwrap());

    let report = tonight_report(&clock, &assets).unwrap();
    assert_eq!(report.phase, "Full Moon");
    assert!(!report.exclamation.is_empty());
    assert!(!report.quote.is_empty());
}
