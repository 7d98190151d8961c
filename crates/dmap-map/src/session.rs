//! Interactive map state: selection, camera, panel and presentation.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::index::RegionIndex;
use crate::panel::{DetailPanel, ForecastLinks};
use crate::presentation::Presentation;
use crate::selection::{ClickTarget, Selection, SelectionMachine};
use crate::view::{ViewAnimator, ViewTransform};

/// Result of a single click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickOutcome {
    pub selection: Selection,
    /// Transform the view is now moving toward.
    pub target: ViewTransform,
    pub stroke_width: f64,
    pub panel: Option<DetailPanel>,
}

/// One user's view of the map.
///
/// Built from a fully loaded [`RegionIndex`], so every lookup it performs
/// sees complete reference data.
#[derive(Debug)]
pub struct MapSession {
    index: RegionIndex,
    config: MapConfig,
    links: ForecastLinks,
    machine: SelectionMachine,
    animator: ViewAnimator,
    panel: Option<DetailPanel>,
    presentation: Presentation,
}

impl MapSession {
    pub fn new(index: RegionIndex, config: MapConfig) -> Result<Self> {
        config.validate()?;
        let links = ForecastLinks::from_config(&config);
        let animator = ViewAnimator::new(
            ViewTransform::overview(&config),
            config.transition_duration(),
        );
        let presentation =
            Presentation::compute(&index, Selection::Overview, config.highlight_date);
        Ok(Self {
            index,
            config,
            links,
            machine: SelectionMachine::new(),
            animator,
            panel: None,
            presentation,
        })
    }

    /// Apply a click at time `now` (an offset on the caller's clock).
    ///
    /// Clicking an id that is not on the map is rejected without changing
    /// any state.
    pub fn click(&mut self, target: ClickTarget, now: Duration) -> Result<ClickOutcome> {
        if let ClickTarget::Region(id) = target
            && !self.index.contains(id)
        {
            return Err(MapError::UnknownRegion { id });
        }
        let previous = self.machine.selection();
        let selection = self.machine.click(target);
        let transform = self.transform_for(selection)?;
        self.panel = self.panel_for(selection);
        self.presentation =
            Presentation::compute(&self.index, selection, self.config.highlight_date);
        self.animator.start(transform, now);
        info!(from = %previous, to = %selection, "selection changed");
        debug!(transform = %transform, "view transition started");
        Ok(ClickOutcome {
            selection,
            target: transform,
            stroke_width: transform.stroke_width(self.config.base_stroke_width),
            panel: self.panel.clone(),
        })
    }

    /// Camera for a selection: region centroid at zoom scale, or the overview.
    pub fn transform_for(&self, selection: Selection) -> Result<ViewTransform> {
        match selection {
            Selection::Overview => Ok(ViewTransform::overview(&self.config)),
            Selection::Zoomed(id) => {
                let indexed = self.index.get(id).ok_or(MapError::UnknownRegion { id })?;
                Ok(ViewTransform::zoomed(&self.config, indexed.centroid))
            }
        }
    }

    fn panel_for(&self, selection: Selection) -> Option<DetailPanel> {
        let records = self.index.records(selection.region()?)?;
        Some(DetailPanel::for_records(&records, &self.links))
    }

    /// Panel for any region, independent of the current selection.
    pub fn panel_for_region(&self, query: &str) -> Result<DetailPanel> {
        let id = self.index.find(query)?.id();
        let records = self
            .index
            .records(id)
            .ok_or(MapError::UnknownRegion { id })?;
        Ok(DetailPanel::for_records(&records, &self.links))
    }

    pub fn selection(&self) -> Selection {
        self.machine.selection()
    }

    pub fn panel(&self) -> Option<&DetailPanel> {
        self.panel.as_ref()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn animator(&self) -> &ViewAnimator {
        &self.animator
    }

    /// Transform on screen at `now`.
    pub fn transform_at(&self, now: Duration) -> ViewTransform {
        self.animator.sample(now)
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }
}
