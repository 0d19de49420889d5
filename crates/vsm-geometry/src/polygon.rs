//! Regular polygon subdivision.
//!
//! A node with polygon order `n` places its children on the `n` vertices of
//! a regular polygon centered on itself. Vertex `i` (zero-based) sits at
//! angle `i * 2π / n`, so the sequence starts on the positive x axis and
//! runs counter-clockwise. No closing vertex is emitted: the polygon has
//! exactly `n` vertices.

use std::f64::consts::TAU;

use crate::{Error, Point, Result};

/// Iterator over the vertices of a regular polygon.
#[derive(Debug, Clone)]
pub struct Polygon {
    center: Point,
    radius: f64,
    order: u32,
    current: u32,
}

impl Polygon {
    /// Create a polygon with `order` vertices at `radius` from `center`.
    ///
    /// Fails for `order == 0` or a negative/non-finite radius. Orders 1 and
    /// 2 are degenerate but well-defined (a point, a diameter); callers that
    /// need an enclosed area enforce [`crate::MIN_POLY_ORDER`] themselves.
    pub fn new(center: Point, radius: f64, order: u32) -> Result<Self> {
        if order == 0 {
            return Err(Error::InvalidOrder(order));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            order,
            current: 0,
        })
    }

    /// Number of vertices.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Angle between consecutive vertices, in radians.
    pub fn angle_step(&self) -> f64 {
        TAU / f64::from(self.order)
    }

    /// Vertex `index` (zero-based), independent of iteration state.
    pub fn vertex(&self, index: u32) -> Point {
        self.center
            .polar_offset(self.radius, f64::from(index) * self.angle_step())
    }
}

impl Iterator for Polygon {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.order {
            return None;
        }
        let vertex = self.vertex(self.current);
        self.current += 1;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.order - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Polygon {}

/// Vertices of a regular polygon, in counter-clockwise order from angle 0.
pub fn regular_polygon_vertices(center: Point, radius: f64, order: u32) -> Result<Vec<Point>> {
    Ok(Polygon::new(center, radius, order)?.collect())
}
