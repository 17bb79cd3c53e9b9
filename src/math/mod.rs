pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod scale;

/// Fixed-precision 2D point. All kernel algorithms operate on these.
pub type Point64 = nalgebra::Point2<i64>;

/// Floating-point 2D point, used for normals, arcs and the float boundary.
pub type PointD = nalgebra::Point2<f64>;

/// Floating-point 2D vector.
pub type VectorD = nalgebra::Vector2<f64>;

/// Largest coordinate magnitude accepted at the float boundary.
///
/// Keeps every coordinate difference inside `i64` and every cross product of
/// differences inside `i128`.
pub const MAX_COORD: i64 = i64::MAX >> 2;

/// Tolerance below which a floating-point offset is treated as zero.
pub const FLOAT_TOLERANCE: f64 = 1e-12;

/// Rounds a floating-point point to the nearest fixed-precision point.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_point(x: f64, y: f64) -> Point64 {
    Point64::new(x.round() as i64, y.round() as i64)
}

/// Converts a fixed-precision point to floating point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_point_d(pt: &Point64) -> PointD {
    PointD::new(pt.x as f64, pt.y as f64)
}
