//! Shared fixtures: three regions laid out as squares on a 960x500 surface.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dmap_ingest::{PrimaryTable, ReferenceData, Topology, TopologyRegion};
use dmap_map::{IdentityProjection, MapConfig, MapSession, MissingRegionPolicy, RegionIndex};
use dmap_model::{PartyDetail, PrimaryRecord, Region, RegionId};

pub const WYOMING: RegionId = RegionId::new(56);
pub const IOWA: RegionId = RegionId::new(19);
pub const GUAM: RegionId = RegionId::new(66);

pub fn super_tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 3, 1).unwrap()
}

fn record(name: &str, date: NaiveDate, total: u32, detail: PartyDetail) -> (String, PrimaryRecord) {
    (
        name.to_string(),
        PrimaryRecord {
            region_name: name.to_string(),
            date,
            primary_type: "caucus".to_string(),
            delegates: total,
            detail,
        },
    )
}

pub fn reference_data() -> ReferenceData {
    let regions = [
        Region::new(WYOMING, "WY", "Wyoming").unwrap(),
        Region::new(IOWA, "IA", "Iowa").unwrap(),
        Region::new(GUAM, "GU", "Guam").unwrap(),
    ];
    let regions = regions.into_iter().map(|r| (r.id, r)).collect::<BTreeMap<_, _>>();
    let democratic: PrimaryTable = [
        record(
            "Wyoming",
            super_tuesday(),
            14,
            PartyDetail::Democratic { super_delegates: 4 },
        ),
        record(
            "Iowa",
            NaiveDate::from_ymd_opt(2016, 2, 1).unwrap(),
            44,
            PartyDetail::Democratic { super_delegates: 8 },
        ),
    ]
    .into_iter()
    .collect();
    let republican: PrimaryTable = [
        record(
            "Wyoming",
            super_tuesday(),
            29,
            PartyDetail::Republican {
                method: "winner-take-all".to_string(),
            },
        ),
        record(
            "Guam",
            NaiveDate::from_ymd_opt(2016, 3, 12).unwrap(),
            9,
            PartyDetail::Republican {
                method: "unbound".to_string(),
            },
        ),
    ]
    .into_iter()
    .collect();
    ReferenceData::new(regions, democratic, republican)
}

fn square(x: f64, y: f64, size: f64) -> Vec<[f64; 2]> {
    vec![[x, y], [x + size, y], [x + size, y + size], [x, y + size]]
}

pub fn topology() -> Topology {
    Topology {
        regions: vec![
            TopologyRegion {
                id: WYOMING,
                polygons: vec![square(100.0, 100.0, 40.0)],
            },
            TopologyRegion {
                id: IOWA,
                polygons: vec![square(140.0, 100.0, 40.0)],
            },
            TopologyRegion {
                id: GUAM,
                polygons: vec![square(800.0, 400.0, 10.0)],
            },
        ],
        borders: vec![vec![[140.0, 100.0], [140.0, 140.0]]],
    }
}

pub fn index() -> RegionIndex {
    RegionIndex::build(
        reference_data(),
        &topology(),
        &IdentityProjection,
        MissingRegionPolicy::Fail,
    )
    .expect("build index")
}

pub fn session() -> MapSession {
    MapSession::new(index(), MapConfig::default()).expect("session")
}
