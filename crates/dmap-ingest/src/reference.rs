//! The immutable reference-data bundle and its readiness gate.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use dmap_model::{Party, PrimaryRecord, Region, RegionId};

use crate::error::{IngestError, Result};

/// Region id → region metadata.
pub type RegionTable = BTreeMap<RegionId, Region>;

/// Region display name → one party's primary record.
pub type PrimaryTable = BTreeMap<String, PrimaryRecord>;

/// The three reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Regions,
    Democratic,
    Republican,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [
        TableKind::Regions,
        TableKind::Democratic,
        TableKind::Republican,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TableKind::Regions => "regions",
            TableKind::Democratic => "democratic",
            TableKind::Republican => "republican",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished table load, delivered to [`PendingReferenceData`] in any order.
#[derive(Debug, Clone)]
pub enum TableLoad {
    Regions(RegionTable),
    Democratic(PrimaryTable),
    Republican(PrimaryTable),
}

impl TableLoad {
    pub const fn kind(&self) -> TableKind {
        match self {
            TableLoad::Regions(_) => TableKind::Regions,
            TableLoad::Democratic(_) => TableKind::Democratic,
            TableLoad::Republican(_) => TableKind::Republican,
        }
    }
}

/// All reference tables, populated once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    regions: RegionTable,
    democratic: PrimaryTable,
    republican: PrimaryTable,
}

impl ReferenceData {
    pub fn new(regions: RegionTable, democratic: PrimaryTable, republican: PrimaryTable) -> Self {
        Self {
            regions,
            democratic,
            republican,
        }
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Find a region by id, postal code or display name.
    pub fn find_region(&self, query: &str) -> Option<&Region> {
        self.regions.values().find(|region| region.matches(query))
    }

    pub fn primary(&self, party: Party, region_name: &str) -> Option<&PrimaryRecord> {
        self.table(party).get(region_name)
    }

    pub fn table(&self, party: Party) -> &PrimaryTable {
        match party {
            Party::Democratic => &self.democratic,
            Party::Republican => &self.republican,
        }
    }
}

/// Collects table loads until every table has arrived.
///
/// Interaction needs a [`ReferenceData`], which only this gate produces once
/// complete, so nothing can observe a partially loaded bundle.
#[derive(Debug, Default)]
pub struct PendingReferenceData {
    regions: Option<RegionTable>,
    democratic: Option<PrimaryTable>,
    republican: Option<PrimaryTable>,
}

impl PendingReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished load. A second load of the same table replaces the first.
    pub fn accept(&mut self, load: TableLoad) {
        debug!(table = %load.kind(), "table ready");
        match load {
            TableLoad::Regions(table) => self.regions = Some(table),
            TableLoad::Democratic(table) => self.democratic = Some(table),
            TableLoad::Republican(table) => self.republican = Some(table),
        }
    }

    /// Builder-style variant of [`accept`](Self::accept).
    #[must_use]
    pub fn with(mut self, load: TableLoad) -> Self {
        self.accept(load);
        self
    }

    /// Tables still outstanding, in [`TableKind::ALL`] order.
    pub fn missing(&self) -> Vec<TableKind> {
        TableKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                TableKind::Regions => self.regions.is_none(),
                TableKind::Democratic => self.democratic.is_none(),
                TableKind::Republican => self.republican.is_none(),
            })
            .collect()
    }

    /// Release the bundle, or report which tables are still pending.
    pub fn finish(self) -> Result<ReferenceData> {
        match (self.regions, self.democratic, self.republican) {
            (Some(regions), Some(democratic), Some(republican)) => {
                Ok(ReferenceData::new(regions, democratic, republican))
            }
            (regions, democratic, republican) => {
                let pending = PendingReferenceData {
                    regions,
                    democratic,
                    republican,
                };
                Err(IngestError::TablesPending {
                    missing: pending.missing(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> RegionTable {
        let wyoming = Region::new(RegionId::new(56), "WY", "Wyoming").unwrap();
        BTreeMap::from([(wyoming.id, wyoming)])
    }

    #[test]
    fn gate_reports_missing_tables() {
        let pending = PendingReferenceData::new().with(TableLoad::Republican(PrimaryTable::new()));
        assert_eq!(
            pending.missing(),
            vec![TableKind::Regions, TableKind::Democratic]
        );
        let err = pending.finish().unwrap_err();
        assert!(matches!(err, IngestError::TablesPending { missing } if missing.len() == 2));
    }

    #[test]
    fn gate_opens_in_any_load_order() {
        let data = PendingReferenceData::new()
            .with(TableLoad::Democratic(PrimaryTable::new()))
            .with(TableLoad::Republican(PrimaryTable::new()))
            .with(TableLoad::Regions(regions()))
            .finish()
            .unwrap();
        assert_eq!(data.region_count(), 1);
        assert_eq!(data.find_region("wy").map(|r| r.id), Some(RegionId::new(56)));
    }
}
