//! Heading-based stepping.
//!
//! An alternative to polygon placement: carry a heading vector, rotate it and
//! step along it. The expansion path does not use these; they are kept for
//! callers that trace paths through the layout.

use crate::Point;

/// Step `distance` from `coord` along `direction`.
///
/// `direction` need not be unit length. Returns `None` for a zero or
/// non-finite direction.
pub fn forward(coord: Point, direction: Point, distance: f64) -> Option<Point> {
    direction.normalized().map(|unit| coord + unit * distance)
}

/// Rotate `direction` counter-clockwise by `angle_degrees`.
pub fn turn(direction: Point, angle_degrees: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Point::new(
        direction.x * cos - direction.y * sin,
        direction.x * sin + direction.y * cos,
    )
}
