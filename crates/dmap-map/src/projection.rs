//! Projection from source coordinates to screen coordinates.
//!
//! Real cartographic projections are external collaborators; the map only
//! needs something that turns a source coordinate into a screen point.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

pub trait Projection {
    fn project(&self, coordinate: [f64; 2]) -> Point;

    fn project_ring(&self, ring: &[[f64; 2]]) -> Vec<Point> {
        ring.iter().map(|c| self.project(*c)).collect()
    }
}

/// Coordinates are already in screen space.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    fn project(&self, [x, y]: [f64; 2]) -> Point {
        Point::new(x, y)
    }
}

/// Uniform scale followed by a translation; `flip_y` turns north-up
/// coordinates into screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjection {
    pub scale: f64,
    pub translate: [f64; 2],
    pub flip_y: bool,
}

impl Projection for LinearProjection {
    fn project(&self, [x, y]: [f64; 2]) -> Point {
        let y = if self.flip_y { -y } else { y };
        Point::new(
            x * self.scale + self.translate[0],
            y * self.scale + self.translate[1],
        )
    }
}

/// Projection selection as it appears in the map configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionConfig {
    #[default]
    Identity,
    Linear {
        scale: f64,
        #[serde(default)]
        translate: [f64; 2],
        #[serde(default)]
        flip_y: bool,
    },
}

impl ProjectionConfig {
    pub fn build(&self) -> Box<dyn Projection> {
        match *self {
            ProjectionConfig::Identity => Box::new(IdentityProjection),
            ProjectionConfig::Linear {
                scale,
                translate,
                flip_y,
            } => Box::new(LinearProjection {
                scale,
                translate,
                flip_y,
            }),
        }
    }
}
