//! Shape and label state derived from the selection.

use chrono::NaiveDate;
use serde::Serialize;

use dmap_model::RegionId;

use crate::geometry::Point;
use crate::index::RegionIndex;
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeState {
    pub id: RegionId,
    pub active: bool,
    /// Either party votes on the highlight date.
    pub election_today: bool,
}

impl ShapeState {
    /// Space-separated CSS classes, empty when none apply.
    pub fn classes(&self) -> String {
        let mut classes = Vec::new();
        if self.election_today {
            classes.push("election-today");
        }
        if self.active {
            classes.push("active");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelState {
    pub id: RegionId,
    pub code: String,
    pub position: Point,
    pub visibility: Visibility,
}

/// Full presentation state; rebuilt from scratch on every selection change.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Presentation {
    pub shapes: Vec<ShapeState>,
    pub labels: Vec<LabelState>,
}

impl Presentation {
    pub fn compute(
        index: &RegionIndex,
        selection: Selection,
        highlight_date: Option<NaiveDate>,
    ) -> Self {
        let mut shapes = Vec::with_capacity(index.regions().len());
        let mut labels = Vec::with_capacity(index.regions().len());
        for indexed in index.regions() {
            let id = indexed.id();
            let selected = selection.is_selected(id);
            let election_today = highlight_date.is_some_and(|date| index.election_on(id, date));
            shapes.push(ShapeState {
                id,
                active: selected,
                election_today,
            });
            labels.push(LabelState {
                id,
                code: indexed.region.code.clone(),
                position: indexed.centroid,
                visibility: if selected {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
            });
        }
        Self { shapes, labels }
    }

    pub fn shape(&self, id: RegionId) -> Option<&ShapeState> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn label(&self, id: RegionId) -> Option<&LabelState> {
        self.labels.iter().find(|label| label.id == id)
    }

    pub fn active_regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.shapes
            .iter()
            .filter(|shape| shape.active)
            .map(|shape| shape.id)
    }

    pub fn visible_labels(&self) -> impl Iterator<Item = &LabelState> {
        self.labels
            .iter()
            .filter(|label| label.visibility == Visibility::Visible)
    }
}
