//! Vertex builders for the polygonal glyphs used by the motifs.
//!
//! Angles follow screen conventions: 0° points along +x and angles grow
//! clockwise because y points down.

use crate::foundation::core::{BezPath, Point};

/// Ordered polyline. A closed polygon implicitly joins its last vertex to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polygon {
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build the path handed to the rasterizer.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pts = self.points.iter();
        let Some(&first) = pts.next() else {
            return path;
        };
        path.move_to(first);
        for &p in pts {
            path.line_to(p);
        }
        if self.closed {
            path.close_path();
        }
        path
    }
}

fn polar(center: Point, radius: f64, angle_rad: f64) -> Point {
    Point::new(
        center.x + angle_rad.cos() * radius,
        center.y + angle_rad.sin() * radius,
    )
}

/// Three vertices at `rotation`, `rotation + 120°`, `rotation + 240°`.
///
/// `-90°` gives an upward-pointing triangle, `90°` a downward one.
pub fn equilateral_triangle(center: Point, radius: f64, rotation_deg: f64) -> Polygon {
    debug_assert!(radius > 0.0, "triangle radius must be > 0");
    let base = rotation_deg.to_radians();
    let step = std::f64::consts::TAU / 3.0;
    Polygon::closed(
        (0..3)
            .map(|i| polar(center, radius, base + f64::from(i) * step))
            .collect(),
    )
}

/// `2 * point_count` vertices alternating outer and inner radius, starting at the top.
pub fn star(center: Point, outer_radius: f64, inner_radius: f64, point_count: u32) -> Polygon {
    debug_assert!(point_count >= 2, "star needs at least two points");
    debug_assert!(outer_radius > 0.0 && inner_radius > 0.0);
    let step = std::f64::consts::PI / f64::from(point_count);
    let start = -std::f64::consts::FRAC_PI_2;
    Polygon::closed(
        (0..point_count * 2)
            .map(|i| {
                let r = if i % 2 == 0 { outer_radius } else { inner_radius };
                polar(center, r, start + f64::from(i) * step)
            })
            .collect(),
    )
}

/// The two interlocking triangles of a six-pointed star: pointing up, then down.
pub fn hexagram(center: Point, radius: f64) -> [Polygon; 2] {
    [
        equilateral_triangle(center, radius, -90.0),
        equilateral_triangle(center, radius, 90.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
