//! Screen-space geometry helpers.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

const EPS_AREA: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        self + (other - self) * t
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_number(self.x), format_number(self.y))
    }
}

/// Signed shoelace area of a ring (closing edge implied).
pub fn ring_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice * 0.5
}

/// Area centroid of one ring, or `None` when the ring has no area.
pub fn ring_centroid(ring: &[Point]) -> Option<Point> {
    let n = ring.len();
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        twice_area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let area = twice_area * 0.5;
    if area.abs() < EPS_AREA {
        return None;
    }
    Some(Point::new(cx / (6.0 * area), cy / (6.0 * area)))
}

/// Centroid of a multi-ring shape: ring centroids weighted by absolute area.
///
/// Ring winding is not trusted, so holes are not subtracted. Shapes without
/// area fall back to the mean vertex; an empty shape has no centroid.
pub fn centroid(rings: &[Vec<Point>]) -> Option<Point> {
    let mut weight = 0.0;
    let mut sum = Point::default();
    for ring in rings {
        if let Some(center) = ring_centroid(ring) {
            let area = ring_area(ring).abs();
            sum = sum + center * area;
            weight += area;
        }
    }
    if weight > EPS_AREA {
        return Some(Point::new(sum.x / weight, sum.y / weight));
    }
    let (total, count) = rings
        .iter()
        .flatten()
        .fold((Point::default(), 0usize), |(acc, n), p| (acc + *p, n + 1));
    (count > 0).then(|| {
        let n = count as f64;
        Point::new(total.x / n, total.y / n)
    })
}

/// SVG path data for closed rings (`M x,y L x,y ... Z`).
pub fn rings_path(rings: &[Vec<Point>]) -> String {
    let mut data = String::new();
    for ring in rings.iter().filter(|ring| !ring.is_empty()) {
        append_polyline(&mut data, ring);
        data.push('Z');
    }
    data
}

/// SVG path data for open polylines.
pub fn lines_path(lines: &[Vec<Point>]) -> String {
    let mut data = String::new();
    for line in lines.iter().filter(|line| !line.is_empty()) {
        append_polyline(&mut data, line);
    }
    data
}

fn append_polyline(data: &mut String, points: &[Point]) {
    for (i, point) in points.iter().enumerate() {
        data.push(if i == 0 { 'M' } else { 'L' });
        data.push_str(&point.to_string());
    }
}

/// Decimals kept for stroke widths, which shrink with the zoom scale.
pub const STROKE_DECIMALS: usize = 4;

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    format_decimal(value, 2)
}

/// Format `value` with at most `decimals` places and no trailing zeros.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    // Avoid "-0".
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ]
    }

    #[test]
    fn square_centroid_is_its_center() {
        let c = ring_centroid(&square(0.0, 0.0, 10.0)).unwrap();
        assert!((c.x - 5.0).abs() < 1e-9);
        assert!((c.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_is_weighted_by_area_regardless_of_winding() {
        let mut small = square(30.0, 0.0, 10.0);
        small.reverse();
        let rings = vec![square(0.0, 0.0, 20.0), small];
        // 400 * (10, 10) + 100 * (35, 5) over 500.
        let c = centroid(&rings).unwrap();
        assert!((c.x - 15.0).abs() < 1e-9);
        assert!((c.y - 9.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_shape_falls_back_to_vertex_mean() {
        let line = vec![vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(8.0, 0.0)]];
        assert_eq!(centroid(&line), Some(Point::new(4.0, 0.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(480.0), "480");
        assert_eq!(format_number(0.375), "0.38");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn stroke_widths_keep_four_decimals() {
        assert_eq!(format_decimal(1.5 / 4.0, STROKE_DECIMALS), "0.375");
        assert_eq!(format_decimal(1.5 / 7.0, STROKE_DECIMALS), "0.2143");
        assert_eq!(format_decimal(1.5, STROKE_DECIMALS), "1.5");
    }

    #[test]
    fn builds_path_data() {
        let ring = vec![Point::new(0.0, 0.0), Point::new(1.5, 0.0), Point::new(1.5, 2.0)];
        assert_eq!(rings_path(&[ring.clone()]), "M0,0L1.5,0L1.5,2Z");
        assert_eq!(lines_path(&[ring]), "M0,0L1.5,0L1.5,2");
    }
}
