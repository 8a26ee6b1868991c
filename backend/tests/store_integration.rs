mod support;

use launch_dash::models::{LaunchSite, Outcome, SiteSelection};
use launch_dash::store::{
    count_by_outcome, filter_by_payload_range, filter_by_site, load_records, LoadError,
    RecordStore,
};
use support::{fixture_store, write_csv, FIXTURE_RECORDS, LAUNCH_CSV};

#[test]
fn test_fixture_loads_every_row() {
    let store = fixture_store();
    assert_eq!(store.len(), FIXTURE_RECORDS);
    assert_eq!(
        store.sites(),
        vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(store.payload_bounds(), Some((0.0, 9600.0)));
}

#[test]
fn test_loaded_records_keep_optional_columns() {
    let store = fixture_store();
    let first = &store.records()[0];
    assert_eq!(first.flight_number.map(|f| f.value()), Some(1));
    assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));
    assert_eq!(first.booster_version_category, "v1.0");
    assert_eq!(first.outcome, Outcome::Failure);

    let last = &store.records()[FIXTURE_RECORDS - 1];
    assert_eq!(last.launch_site, "KSC LC-39A");
    assert_eq!(last.payload_kg(), 6460.0);
    assert!(last.is_success());
}

#[test]
fn test_load_records_matches_store() {
    let file = write_csv(LAUNCH_CSV);
    let records = load_records(file.path()).unwrap();
    let store = RecordStore::from_records(records.clone());
    assert_eq!(store.records(), records.as_slice());
}

#[test]
fn test_column_order_does_not_matter() {
    let file = write_csv(
        "Booster Version Category,class,Payload Mass (kg),Launch Site\n\
         FT,1,2490,KSC LC-39A\n\
         B5,0,7076,CCAFS SLC-40\n",
    );
    let store = RecordStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[1].launch_site, "CCAFS SLC-40");
    assert_eq!(store.records()[1].booster_version_category, "B5");
}

#[test]
fn test_header_only_file_is_empty_store() {
    let file = write_csv("Launch Site,Payload Mass (kg),class,Booster Version Category\n");
    let store = RecordStore::load(file.path()).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.payload_bounds(), None);
}

#[test]
fn test_schema_mismatch_lists_every_missing_column() {
    let file = write_csv("Flight Number,Launch Site\n1,CCAFS LC-40\n");
    let err = RecordStore::load(file.path()).unwrap_err();
    assert!(err.is_schema_error());
    match err {
        LoadError::SchemaMismatch { missing } => assert_eq!(
            missing,
            vec![
                "Payload Mass (kg)".to_string(),
                "class".to_string(),
                "Booster Version Category".to_string()
            ]
        ),
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spacex_launch_dash.csv");
    match RecordStore::load(&path).unwrap_err() {
        LoadError::NotFound(reported) => assert_eq!(reported, path),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn test_queries_over_fixture() {
    let store = fixture_store();

    let all = count_by_outcome(store.records(), &SiteSelection::AllSites);
    assert_eq!(all.get("CCAFS LC-40"), Some(1));
    assert_eq!(all.get("VAFB SLC-4E"), Some(1));
    assert_eq!(all.get("KSC LC-39A"), Some(3));
    assert_eq!(all.get("CCAFS SLC-40"), Some(1));
    assert_eq!(all.total(), 6);

    let ksc = SiteSelection::Site(LaunchSite::KscLc39a);
    let at_ksc = count_by_outcome(store.records(), &ksc);
    assert_eq!(at_ksc.get("Success"), Some(3));
    assert_eq!(at_ksc.get("Failure"), Some(1));

    let in_window = filter_by_payload_range(filter_by_site(store.records(), &ksc), 1000.0, 6000.0);
    let payloads: Vec<f64> = in_window.iter().map(|r| r.payload_kg()).collect();
    assert_eq!(payloads, vec![2490.0, 5300.0, 3600.0]);
}
