//! Loading reference data and topology from a data directory.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use dmap_ingest::{
    DEMOCRATIC_FILE, IngestError, REGIONS_FILE, REPUBLICAN_FILE, TOPOLOGY_FILE,
    load_reference_data, load_topology,
};
use dmap_model::{Party, PartyDetail, RegionId};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn write_tables(dir: &Path) {
    write(
        dir,
        REGIONS_FILE,
        "id\tcode\tname\n56\tWY\tWyoming\n19\tIA\tIowa\n66\tGU\tGuam\n",
    );
    write(
        dir,
        DEMOCRATIC_FILE,
        "state,date,type,total,super\n\
         Wyoming,2016-03-01,caucus,14,4\n\
         Iowa,2016-02-01,caucus,44,8\n",
    );
    write(
        dir,
        REPUBLICAN_FILE,
        "state,date,type,total,method\n\
         Wyoming,2016-03-01,caucus,29,winner-take-all\n\
         Guam,2016-03-12,convention,9,unbound\n",
    );
}

#[test]
fn loads_all_reference_tables() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_tables(dir.path());

    let data = load_reference_data(dir.path()).expect("load reference data");

    assert_eq!(data.region_count(), 3);
    let wyoming = data.region(RegionId::new(56)).expect("Wyoming");
    assert_eq!(wyoming.code, "WY");
    let dem = data
        .primary(Party::Democratic, &wyoming.name)
        .expect("Democratic record");
    assert_eq!(dem.date, NaiveDate::from_ymd_opt(2016, 3, 1).unwrap());
    assert_eq!(dem.detail, PartyDetail::Democratic { super_delegates: 4 });
    assert!(data.primary(Party::Democratic, "Guam").is_none());
    assert!(data.primary(Party::Republican, "Iowa").is_none());
}

#[test]
fn missing_table_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_tables(dir.path());
    fs::remove_file(dir.path().join(REPUBLICAN_FILE)).expect("remove gop");

    let err = load_reference_data(dir.path()).unwrap_err();
    match err {
        IngestError::FileNotFound { path } => assert!(path.ends_with(REPUBLICAN_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_topology_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        TOPOLOGY_FILE,
        r#"{"regions": [{"id": 56, "polygons": [[[0, 0], [4, 0], [4, 2], [0, 2]]]}]}"#,
    );

    let topology = load_topology(&dir.path().join(TOPOLOGY_FILE)).expect("load topology");
    assert_eq!(topology.regions[0].id, RegionId::new(56));
}

#[test]
fn unreachable_topology_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_topology(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
