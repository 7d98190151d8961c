//! Loading of the delegate map inputs: the region table, the two party
//! primary tables and the decoded map topology.

pub mod error;
pub mod paths;
pub mod reference;
pub mod tables;
pub mod topology;

pub use error::{IngestError, Result};
pub use paths::{
    DATA_DIR_ENV_VAR, DEMOCRATIC_FILE, REGIONS_FILE, REPUBLICAN_FILE, TOPOLOGY_FILE,
    default_data_dir, load_reference_data,
};
pub use reference::{
    PendingReferenceData, PrimaryTable, ReferenceData, RegionTable, TableKind, TableLoad,
};
pub use tables::{
    load_democratic, load_regions, load_republican, read_democratic, read_regions,
    read_republican,
};
pub use topology::{Ring, Topology, TopologyRegion, load_topology, parse_topology};
