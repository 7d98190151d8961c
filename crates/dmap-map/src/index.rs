//! Joins topology features to region metadata and primary records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use dmap_ingest::{ReferenceData, Topology};
use dmap_model::{Party, PrimaryRecord, Region, RegionId};

use crate::error::{MapError, Result};
use crate::geometry::{Point, centroid};
use crate::projection::Projection;

/// What to do with a feature whose id is missing from the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRegionPolicy {
    /// Treat it as a data-integrity error.
    #[default]
    Fail,
    /// Drop the feature and log a warning.
    Skip,
}

/// A drawable region: metadata plus projected geometry.
#[derive(Debug, Clone)]
pub struct IndexedRegion {
    pub region: Region,
    pub rings: Vec<Vec<Point>>,
    /// Screen-space focal point used for zooming and labels.
    pub centroid: Point,
}

impl IndexedRegion {
    pub fn id(&self) -> RegionId {
        self.region.id
    }
}

/// A region together with whatever primary records exist for it.
#[derive(Debug, Clone, Copy)]
pub struct RegionRecords<'a> {
    pub region: &'a Region,
    pub democratic: Option<&'a PrimaryRecord>,
    pub republican: Option<&'a PrimaryRecord>,
}

impl<'a> RegionRecords<'a> {
    pub fn record(&self, party: Party) -> Option<&'a PrimaryRecord> {
        match party {
            Party::Democratic => self.democratic,
            Party::Republican => self.republican,
        }
    }

    /// True when either party votes on `date`.
    pub fn election_on(&self, date: NaiveDate) -> bool {
        Party::ALL
            .into_iter()
            .filter_map(|party| self.record(party))
            .any(|record| record.date == date)
    }
}

#[derive(Debug, Clone)]
pub struct RegionIndex {
    data: ReferenceData,
    regions: Vec<IndexedRegion>,
    positions: BTreeMap<RegionId, usize>,
    borders: Vec<Vec<Point>>,
}

impl RegionIndex {
    /// Project every topology feature and join it to `data`.
    ///
    /// Features keep their topology order, which is also their draw order.
    pub fn build(
        data: ReferenceData,
        topology: &Topology,
        projection: &dyn Projection,
        policy: MissingRegionPolicy,
    ) -> Result<Self> {
        let mut regions = Vec::with_capacity(topology.regions.len());
        let mut positions = BTreeMap::new();
        for feature in &topology.regions {
            let Some(region) = data.region(feature.id) else {
                match policy {
                    MissingRegionPolicy::Fail => {
                        return Err(MapError::UnknownRegion { id: feature.id });
                    }
                    MissingRegionPolicy::Skip => {
                        warn!(id = %feature.id, "skipping feature without region metadata");
                        continue;
                    }
                }
            };
            let rings: Vec<Vec<Point>> = feature
                .polygons
                .iter()
                .map(|ring| projection.project_ring(ring))
                .collect();
            let center = centroid(&rings).ok_or(MapError::EmptyGeometry { id: feature.id })?;
            positions.insert(feature.id, regions.len());
            regions.push(IndexedRegion {
                region: region.clone(),
                rings,
                centroid: center,
            });
        }
        let borders = topology
            .borders
            .iter()
            .map(|line| projection.project_ring(line))
            .collect();
        debug!(
            regions = regions.len(),
            table_regions = data.region_count(),
            "built region index"
        );
        Ok(Self {
            data,
            regions,
            positions,
            borders,
        })
    }

    pub fn get(&self, id: RegionId) -> Option<&IndexedRegion> {
        self.positions.get(&id).map(|&i| &self.regions[i])
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Drawable regions in draw order.
    pub fn regions(&self) -> &[IndexedRegion] {
        &self.regions
    }

    pub fn borders(&self) -> &[Vec<Point>] {
        &self.borders
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.data
    }

    /// Records for a drawable region.
    pub fn records(&self, id: RegionId) -> Option<RegionRecords<'_>> {
        let region = &self.get(id)?.region;
        Some(RegionRecords {
            region,
            democratic: self.data.primary(Party::Democratic, &region.name),
            republican: self.data.primary(Party::Republican, &region.name),
        })
    }

    /// True when the region at `id` holds a primary on `date`.
    pub fn election_on(&self, id: RegionId, date: NaiveDate) -> bool {
        self.records(id)
            .is_some_and(|records| records.election_on(date))
    }

    /// Find a drawable region by id, postal code or display name.
    pub fn find(&self, query: &str) -> Result<&IndexedRegion> {
        self.regions
            .iter()
            .find(|indexed| indexed.region.matches(query))
            .ok_or_else(|| MapError::NoSuchRegion {
                query: query.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use dmap_ingest::{PrimaryTable, TopologyRegion};

    use super::*;
    use crate::projection::IdentityProjection;

    fn data() -> ReferenceData {
        let wyoming = Region::new(RegionId::new(56), "WY", "Wyoming").unwrap();
        ReferenceData::new(
            BTreeMap::from([(wyoming.id, wyoming)]),
            PrimaryTable::new(),
            PrimaryTable::new(),
        )
    }

    fn topology(ids: &[u32]) -> Topology {
        Topology {
            regions: ids
                .iter()
                .map(|&id| TopologyRegion {
                    id: RegionId::new(id),
                    polygons: vec![vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]],
                })
                .collect(),
            borders: Vec::new(),
        }
    }

    #[test]
    fn unknown_feature_fails_by_default() {
        let err = RegionIndex::build(
            data(),
            &topology(&[56, 99]),
            &IdentityProjection,
            MissingRegionPolicy::Fail,
        )
        .unwrap_err();
        assert!(matches!(err, MapError::UnknownRegion { id } if id == RegionId::new(99)));
    }

    #[test]
    fn unknown_feature_can_be_skipped() {
        let index = RegionIndex::build(
            data(),
            &topology(&[99, 56]),
            &IdentityProjection,
            MissingRegionPolicy::Skip,
        )
        .unwrap();
        assert_eq!(index.regions().len(), 1);
        assert!(index.contains(RegionId::new(56)));
        assert!(!index.contains(RegionId::new(99)));
        assert_eq!(index.get(RegionId::new(56)).unwrap().centroid, Point::new(5.0, 5.0));
    }

    #[test]
    fn records_are_absent_when_tables_have_no_entry() {
        let index = RegionIndex::build(
            data(),
            &topology(&[56]),
            &IdentityProjection,
            MissingRegionPolicy::Fail,
        )
        .unwrap();
        let records = index.records(RegionId::new(56)).unwrap();
        assert_eq!(records.region.name, "Wyoming");
        assert!(records.democratic.is_none());
        assert!(records.republican.is_none());
        assert!(index.find("wyoming").is_ok());
        assert!(matches!(index.find("Ohio"), Err(MapError::NoSuchRegion { .. })));
    }
}
