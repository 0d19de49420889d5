//! VSM Network Geometry
//!
//! Pure geometry for the self-similar node layout: regular-polygon vertices,
//! depth-scaled edge length, marker size and color.
//!
//! # Convergence
//!
//! Children of a node at layer `n` are placed on a regular polygon of radius
//! `edge_length(n) = 1 / (n + 2)` around it. The radius is strictly
//! decreasing in `n`, so every deeper ring is tighter than the ring that
//! produced its parent and descendant clusters stay clear of their
//! ancestors however deep the tree grows.
//!
//! # Determinism
//!
//! Every function here is pure. A vertex depends only on the center, the
//! radius and the polygon order, so a node's position depends only on its
//! ancestry.

mod bounds;
mod error;
mod heading;
mod point;
mod polygon;
mod scale;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use heading::{forward, turn};
pub use point::Point;
pub use polygon::{regular_polygon_vertices, Polygon};
pub use scale::{
    color_for_layer, color_value, edge_length, marker_size, Rgba, ScaleConfig,
};

/// Smallest polygon order that encloses an area.
pub const MIN_POLY_ORDER: u32 = 3;

/// Polygon order used when nothing else is specified (hexagon).
pub const DEFAULT_POLY_ORDER: u32 = 6;

const _: () = assert!(DEFAULT_POLY_ORDER >= MIN_POLY_ORDER);
