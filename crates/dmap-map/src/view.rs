//! Camera transform and its animated transitions.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::geometry::{Point, format_number};

/// `translate(center) scale(k) translate(-focus)`: puts `focus` at the
/// centre of the surface, magnified `scale` times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub center: Point,
    pub scale: f64,
    pub focus: Point,
}

impl ViewTransform {
    /// Whole-map view.
    pub fn overview(config: &MapConfig) -> Self {
        Self {
            center: config.center(),
            scale: 1.0,
            focus: config.center(),
        }
    }

    /// View zoomed onto `focus`.
    pub fn zoomed(config: &MapConfig, focus: Point) -> Self {
        Self {
            center: config.center(),
            scale: config.zoom_scale,
            focus,
        }
    }

    /// Net translation once the three steps are composed.
    pub fn offset(&self) -> Point {
        self.center - self.focus * self.scale
    }

    fn from_offset(center: Point, scale: f64, offset: Point) -> Self {
        Self {
            center,
            scale,
            focus: (center - offset) * (1.0 / scale),
        }
    }

    /// Map a point from map space to surface space.
    pub fn apply(&self, point: Point) -> Point {
        self.offset() + point * self.scale
    }

    /// Border width that renders at `base` pixels regardless of zoom.
    pub fn stroke_width(&self, base: f64) -> f64 {
        base / self.scale
    }

    /// Interpolate scale and net translation, as SVG transform tweening does.
    pub fn interpolate(&self, to: &ViewTransform, t: f64) -> ViewTransform {
        let scale = self.scale + (to.scale - self.scale) * t;
        let offset = self.offset().lerp(to.offset(), t);
        let center = self.center.lerp(to.center, t);
        ViewTransform::from_offset(center, scale, offset)
    }

    pub fn approx_eq(&self, other: &ViewTransform) -> bool {
        const EPS: f64 = 1e-6;
        (self.scale - other.scale).abs() < EPS
            && self.center.distance(other.center) < EPS
            && self.focus.distance(other.focus) < EPS
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({})scale({})translate({})",
            self.center,
            format_number(self.scale),
            self.focus * -1.0
        )
    }
}

/// Cubic in-out easing on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// One in-flight move between two transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: ViewTransform,
    pub to: ViewTransform,
    pub started_at: Duration,
    pub duration: Duration,
}

impl Transition {
    /// Eased progress at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        ease_cubic_in_out(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    pub fn sample(&self, now: Duration) -> ViewTransform {
        self.from.interpolate(&self.to, self.progress(now))
    }

    pub fn ends_at(&self) -> Duration {
        self.started_at + self.duration
    }
}

/// Drives view transitions against an explicit clock.
///
/// Times are offsets from an arbitrary origin chosen by the caller. Starting a
/// transition while another is running retargets from wherever the view is at
/// that moment; nothing is queued.
#[derive(Debug, Clone)]
pub struct ViewAnimator {
    resting: ViewTransform,
    active: Option<Transition>,
    duration: Duration,
}

impl ViewAnimator {
    pub fn new(initial: ViewTransform, duration: Duration) -> Self {
        Self {
            resting: initial,
            active: None,
            duration,
        }
    }

    /// Begin moving toward `target` at `now`.
    pub fn start(&mut self, target: ViewTransform, now: Duration) -> Transition {
        let from = self.sample(now);
        let transition = Transition {
            from,
            to: target,
            started_at: now,
            duration: self.duration,
        };
        self.resting = target;
        self.active = Some(transition);
        transition
    }

    /// Transform displayed at `now`.
    pub fn sample(&self, now: Duration) -> ViewTransform {
        match &self.active {
            Some(transition) if now < transition.ends_at() => transition.sample(now),
            _ => self.resting,
        }
    }

    /// Where the view ends up once the current transition completes.
    pub fn target(&self) -> ViewTransform {
        self.resting
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.active.is_none_or(|transition| now >= transition.ends_at())
    }

    pub fn active(&self) -> Option<&Transition> {
        self.active.as_ref()
    }
}
