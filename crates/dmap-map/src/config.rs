//! Map configuration.
//!
//! Every field has a default, so a config file only lists overrides:
//!
//! ```toml
//! zoom_scale = 6.0
//! highlight_date = "2016-03-15"
//!
//! [link_exclusions]
//! republican = ["Guam", "Wyoming"]
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dmap_model::Party;

use crate::error::{MapError, Result};
use crate::geometry::Point;
use crate::projection::ProjectionConfig;

/// Placeholder replaced by the lowercased region name in forecast links.
pub const REGION_PLACEHOLDER: &str = "{region}";
/// Placeholder replaced by the lowercased party name in forecast links.
pub const PARTY_PLACEHOLDER: &str = "{party}";

pub const DEFAULT_FORECAST_URL_TEMPLATE: &str =
    "http://projects.fivethirtyeight.com/election-2016/primary-forecast/{region}-{party}";

const DEFAULT_DEMOCRATIC_EXCLUSIONS: [&str; 8] = [
    "American Samoa",
    "Democrats Abroad",
    "Guam",
    "North Dakota",
    "Northern Mariana Islands",
    "Puerto Rico",
    "Virgin Islands",
    "Wyoming",
];

const DEFAULT_REPUBLICAN_EXCLUSIONS: [&str; 8] = [
    "American Samoa",
    "Colorado",
    "Guam",
    "North Dakota",
    "Northern Mariana Islands",
    "Puerto Rico",
    "Virgin Islands",
    "Wyoming",
];

/// Regions without an external forecast page, per party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkExclusions {
    pub democratic: BTreeSet<String>,
    pub republican: BTreeSet<String>,
}

impl Default for LinkExclusions {
    fn default() -> Self {
        Self {
            democratic: DEFAULT_DEMOCRATIC_EXCLUSIONS.map(String::from).into(),
            republican: DEFAULT_REPUBLICAN_EXCLUSIONS.map(String::from).into(),
        }
    }
}

impl LinkExclusions {
    pub fn none() -> Self {
        Self {
            democratic: BTreeSet::new(),
            republican: BTreeSet::new(),
        }
    }

    pub fn for_party(&self, party: Party) -> &BTreeSet<String> {
        match party {
            Party::Democratic => &self.democratic,
            Party::Republican => &self.republican,
        }
    }

    /// Case-insensitive membership test.
    pub fn excludes(&self, party: Party, region_name: &str) -> bool {
        self.for_party(party)
            .iter()
            .any(|name| name.eq_ignore_ascii_case(region_name.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Map surface width in pixels.
    pub width: f64,
    /// Map surface height in pixels.
    pub height: f64,
    /// Scale applied when a region is zoomed.
    pub zoom_scale: f64,
    /// Duration of every view transition.
    pub transition_ms: u64,
    /// Border stroke width at scale 1; divided by the scale when zoomed.
    pub base_stroke_width: f64,
    /// Regions voting on this date get the `election-today` marker.
    pub highlight_date: Option<NaiveDate>,
    pub forecast_url_template: String,
    pub link_exclusions: LinkExclusions,
    pub projection: ProjectionConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            zoom_scale: 4.0,
            transition_ms: 750,
            base_stroke_width: 1.5,
            highlight_date: NaiveDate::from_ymd_opt(2016, 3, 1),
            forecast_url_template: DEFAULT_FORECAST_URL_TEMPLATE.to_string(),
            link_exclusions: LinkExclusions::default(),
            projection: ProjectionConfig::default(),
        }
    }
}

impl MapConfig {
    /// Load overrides from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| MapError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MapConfig = toml::from_str(&text).map_err(|e| MapError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(MapError::config(format!(
                "map size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.zoom_scale.is_finite() && self.zoom_scale > 0.0) {
            return Err(MapError::config(format!(
                "zoom_scale must be positive, got {}",
                self.zoom_scale
            )));
        }
        if !(self.base_stroke_width.is_finite() && self.base_stroke_width > 0.0) {
            return Err(MapError::config("base_stroke_width must be positive"));
        }
        if !self.forecast_url_template.contains(REGION_PLACEHOLDER) {
            return Err(MapError::config(format!(
                "forecast_url_template must contain {REGION_PLACEHOLDER}"
            )));
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
