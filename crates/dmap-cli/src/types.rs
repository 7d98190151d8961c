use std::path::PathBuf;

use dmap_map::{ClickOutcome, DetailPanel};

/// One replayed click.
#[derive(Debug)]
pub struct ClickStep {
    pub input: String,
    pub at_ms: u64,
    pub outcome: ClickOutcome,
}

#[derive(Debug)]
pub struct ClickReport {
    pub steps: Vec<ClickStep>,
    /// Panel left on screen after the final click.
    pub panel: Option<DetailPanel>,
}

#[derive(Debug)]
pub struct RenderResult {
    pub output: PathBuf,
    pub regions: usize,
    pub selection: String,
}
