//! Decoded map geometry.
//!
//! The loader expects geometry already converted from TopoJSON into plain
//! rings of `[x, y]` coordinates:
//!
//! ```json
//! {
//!   "regions": [{ "id": 56, "polygons": [[[0, 0], [10, 0], [10, 10]]] }],
//!   "borders": [[[10, 0], [10, 10]]]
//! }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use dmap_model::RegionId;

use crate::error::{IngestError, Result};

/// A closed ring of coordinates; the closing point may be omitted.
pub type Ring = Vec<[f64; 2]>;

/// One region's shape, tagged with the id used to join region metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyRegion {
    pub id: RegionId,
    pub polygons: Vec<Ring>,
}

/// Every region shape plus the shared interior border mesh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Topology {
    pub regions: Vec<TopologyRegion>,
    /// Open polylines along borders shared by two regions.
    #[serde(default)]
    pub borders: Vec<Ring>,
}

/// Load and validate a topology document.
pub fn load_topology(path: &Path) -> Result<Topology> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    parse_topology(&text, path)
}

/// Parse and validate a topology document; `source` is only used in errors.
pub fn parse_topology(text: &str, source: &Path) -> Result<Topology> {
    let topology: Topology = serde_json::from_str(text).map_err(|e| IngestError::Topology {
        path: source.to_path_buf(),
        source: e,
    })?;
    validate(&topology, source)?;
    debug!(
        regions = topology.regions.len(),
        borders = topology.borders.len(),
        path = %source.display(),
        "loaded topology"
    );
    Ok(topology)
}

fn validate(topology: &Topology, source: &Path) -> Result<()> {
    let invalid = |reason: String| IngestError::InvalidTopology {
        path: source.to_path_buf(),
        reason,
    };
    if topology.regions.is_empty() {
        return Err(invalid("no regions".to_string()));
    }
    let mut seen = BTreeSet::new();
    for region in &topology.regions {
        if !seen.insert(region.id) {
            return Err(invalid(format!("region {} appears more than once", region.id)));
        }
        if region.polygons.is_empty() {
            return Err(invalid(format!("region {} has no polygons", region.id)));
        }
        if let Some(ring) = region.polygons.iter().find(|ring| ring.len() < 3) {
            return Err(invalid(format!(
                "region {} has a ring with {} points",
                region.id,
                ring.len()
            )));
        }
        let finite = region
            .polygons
            .iter()
            .flatten()
            .all(|[x, y]| x.is_finite() && y.is_finite());
        if !finite {
            return Err(invalid(format!("region {} has non-finite coordinates", region.id)));
        }
    }
    Ok(())
}
