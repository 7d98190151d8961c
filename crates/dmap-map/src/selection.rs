//! Click-driven selection state.
//!
//! ```text
//! Overview   --click(r)----------> Zoomed(r)
//! Zoomed(r)  --click(r)----------> Overview
//! Zoomed(r)  --click(r2), r2!=r--> Zoomed(r2)
//! any        --click(background)-> Overview
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use dmap_model::RegionId;

/// The currently zoomed region, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "region", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Overview,
    Zoomed(RegionId),
}

impl Selection {
    pub fn region(&self) -> Option<RegionId> {
        match self {
            Selection::Overview => None,
            Selection::Zoomed(id) => Some(*id),
        }
    }

    pub fn is_selected(&self, id: RegionId) -> bool {
        self.region() == Some(id)
    }

    /// The state reached by clicking `target` from this state.
    #[must_use]
    pub fn after_click(self, target: ClickTarget) -> Selection {
        match (self, target) {
            (_, ClickTarget::Background) => Selection::Overview,
            (Selection::Zoomed(current), ClickTarget::Region(id)) if current == id => {
                Selection::Overview
            }
            (_, ClickTarget::Region(id)) => Selection::Zoomed(id),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overview => f.write_str("overview"),
            Selection::Zoomed(id) => write!(f, "zoomed({id})"),
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    Background,
    Region(RegionId),
}

/// Holds the selection between clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionMachine {
    selection: Selection,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Apply a click and return the new selection.
    pub fn click(&mut self, target: ClickTarget) -> Selection {
        self.selection = self.selection.after_click(target);
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WY: ClickTarget = ClickTarget::Region(RegionId::new(56));
    const IA: ClickTarget = ClickTarget::Region(RegionId::new(19));

    #[test]
    fn region_click_zooms_and_repeat_click_resets() {
        let mut machine = SelectionMachine::new();
        assert_eq!(machine.click(WY), Selection::Zoomed(RegionId::new(56)));
        assert_eq!(machine.click(WY), Selection::Overview);
    }

    #[test]
    fn second_region_replaces_first() {
        let mut machine = SelectionMachine::new();
        machine.click(WY);
        assert_eq!(machine.click(IA), Selection::Zoomed(RegionId::new(19)));
    }

    #[test]
    fn background_always_resets() {
        let mut machine = SelectionMachine::new();
        assert_eq!(machine.click(ClickTarget::Background), Selection::Overview);
        machine.click(WY);
        assert_eq!(machine.click(ClickTarget::Background), Selection::Overview);
    }
}
