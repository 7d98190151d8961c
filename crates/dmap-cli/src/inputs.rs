//! Resolving and loading the map inputs named on the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info_span;

use dmap_ingest::{
    ReferenceData, TOPOLOGY_FILE, default_data_dir, load_reference_data, load_topology,
};
use dmap_map::{ClickTarget, MapConfig, MapSession, MissingRegionPolicy, RegionIndex};

/// Click target naming the map background.
pub const BACKGROUND: &str = "background";

#[derive(Debug, Clone)]
pub struct MapInputs {
    pub data_dir: PathBuf,
    pub topology: PathBuf,
    pub config: Option<PathBuf>,
    pub policy: MissingRegionPolicy,
}

impl MapInputs {
    /// Fill unset paths from the data directory defaults.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        topology: Option<PathBuf>,
        config: Option<PathBuf>,
        skip_unknown_regions: bool,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let topology = topology.unwrap_or_else(|| data_dir.join(TOPOLOGY_FILE));
        let policy = if skip_unknown_regions {
            MissingRegionPolicy::Skip
        } else {
            MissingRegionPolicy::Fail
        };
        Self {
            data_dir,
            topology,
            config,
            policy,
        }
    }

    pub fn load_config(&self) -> Result<MapConfig> {
        MapConfig::load(self.config.as_deref()).context("load map config")
    }

    pub fn load_reference(&self) -> Result<ReferenceData> {
        load_reference_data(&self.data_dir)
            .with_context(|| format!("load reference data from {}", self.data_dir.display()))
    }

    /// Load everything and build an interactive session.
    pub fn load_session(&self) -> Result<MapSession> {
        let span = info_span!("load_session", topology = %self.topology.display());
        let _guard = span.enter();
        let config = self.load_config()?;
        let data = self.load_reference()?;
        let topology = load_topology(&self.topology).context("load topology")?;
        let projection = config.projection.build();
        let index = RegionIndex::build(data, &topology, projection.as_ref(), self.policy)
            .context("index map regions")?;
        MapSession::new(index, config).context("start map session")
    }
}

/// Parse a click target: `background`, or a region id, code or name on the map.
pub fn parse_target(session: &MapSession, raw: &str) -> Result<ClickTarget> {
    if raw.trim().eq_ignore_ascii_case(BACKGROUND) {
        return Ok(ClickTarget::Background);
    }
    let indexed = session.index().find(raw)?;
    Ok(ClickTarget::Region(indexed.id()))
}
