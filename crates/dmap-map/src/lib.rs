//! Interactive delegate map: region index, selection and zoom, detail panel,
//! presentation state and SVG rendering.

pub mod config;
pub mod error;
pub mod geometry;
pub mod index;
pub mod panel;
pub mod presentation;
pub mod projection;
pub mod selection;
pub mod session;
pub mod svg;
pub mod view;

pub use config::{DEFAULT_FORECAST_URL_TEMPLATE, LinkExclusions, MapConfig};
pub use error::{MapError, Result};
pub use geometry::Point;
pub use index::{IndexedRegion, MissingRegionPolicy, RegionIndex, RegionRecords};
pub use panel::{DetailPanel, ForecastLinks, PartySection};
pub use presentation::{LabelState, Presentation, ShapeState, Visibility};
pub use projection::{IdentityProjection, LinearProjection, Projection, ProjectionConfig};
pub use selection::{ClickTarget, Selection, SelectionMachine};
pub use session::{ClickOutcome, MapSession};
pub use svg::{render_document, render_svg, write_svg};
pub use view::{Transition, ViewAnimator, ViewTransform, ease_cubic_in_out};
