use std::fs;

use pricing_desk::{
    domain::{recompute, AppState, BusinessProfile, Item, PricingSettings},
    infra::export::{export_report, write_csv, write_json, ExportFormat, COLUMNS},
    util::persistence::{load_persisted_state_from, save_persisted_state_to},
};
use tempfile::tempdir;

fn sample_report() -> pricing_desk::domain::ComparisonReport {
    let items = vec![
        Item::new("Latte", 1.5).with_practiced_price(4.5),
        Item::new("Muffin", 1.0),
    ];
    recompute(&BusinessProfile::default(), &items, &PricingSettings::default())
        .expect("default profile is feasible")
}

#[test]
fn csv_has_one_row_per_item_under_the_header() {
    let mut buffer = Vec::new();
    write_csv(&sample_report(), &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers: Vec<_> = reader.headers().unwrap().iter().map(str::to_owned).collect();
    assert_eq!(headers, COLUMNS);

    let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "Latte");
    assert_eq!(&records[0][2], "1.50");
    assert_eq!(&records[0][7], "4.50");
    assert_eq!(&records[0][14], "ok");
    // No practiced price: practiced columns stay blank.
    assert_eq!(&records[1][7], "");
    assert_eq!(&records[1][11], "");
}

#[test]
fn json_carries_rows_and_summary() {
    let mut buffer = Vec::new();
    write_json(&sample_report(), &mut buffer).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(2));
    assert!(value["summary"]["markup"].as_f64().is_some());
    assert_eq!(value["rows"][0]["name"], "Latte");
}

#[test]
fn export_writes_a_timestamped_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("reports");

    let path = export_report(&sample_report(), ExportFormat::Csv, &target).unwrap();

    assert_eq!(path.parent(), Some(target.as_path()));
    let file_name = path.file_name().unwrap().to_string_lossy();
    assert!(file_name.starts_with("pricing-report-"));
    assert!(file_name.ends_with(".csv"));
    assert!(fs::read_to_string(&path).unwrap().starts_with("Position,Item"));
}

#[test]
fn session_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let mut state = AppState::default();
    state.profile.fee_rate = 0.03;
    state.items.push(Item::new("Cookie", 0.4).with_practiced_price(2.0));
    save_persisted_state_to(&state.to_persisted(), &path).unwrap();

    let mut restored = AppState::default();
    restored.apply_persisted(load_persisted_state_from(&path).expect("session saved"));
    assert_eq!(restored, state);
}

#[test]
fn missing_or_corrupt_sessions_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    assert!(load_persisted_state_from(&path).is_none());

    fs::write(&path, "{ not json").unwrap();
    assert!(load_persisted_state_from(&path).is_none());
}
