//! Default data locations and one-shot loading of the reference bundle.

use std::path::{Path, PathBuf};

use tracing::info_span;

use crate::error::Result;
use crate::reference::{PendingReferenceData, ReferenceData, TableLoad};
use crate::tables::{load_democratic, load_regions, load_republican};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "DELEGATE_MAP_DATA_DIR";

pub const REGIONS_FILE: &str = "us-state-names.tsv";
pub const DEMOCRATIC_FILE: &str = "dem.csv";
pub const REPUBLICAN_FILE: &str = "gop.csv";
pub const TOPOLOGY_FILE: &str = "us.json";

/// Get the default data directory.
///
/// Checks `DELEGATE_MAP_DATA_DIR` first, then falls back to the workspace
/// `data/` directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Load all three reference tables from `dir`.
///
/// Any table failing to load is fatal; there are no retries.
pub fn load_reference_data(dir: &Path) -> Result<ReferenceData> {
    let span = info_span!("load_reference_data", dir = %dir.display());
    let _guard = span.enter();
    let mut pending = PendingReferenceData::new();
    pending.accept(TableLoad::Regions(load_regions(&dir.join(REGIONS_FILE))?));
    pending.accept(TableLoad::Democratic(load_democratic(&dir.join(DEMOCRATIC_FILE))?));
    pending.accept(TableLoad::Republican(load_republican(&dir.join(REPUBLICAN_FILE))?));
    pending.finish()
}
