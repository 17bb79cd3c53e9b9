pub mod rect;

use crate::math::{Point64, PointD};

pub use rect::{Rect64, RectD};

/// Fixed-precision path. Closed paths have an implicit edge from the last
/// point back to the first.
pub type Path64 = Vec<Point64>;

/// Collection of fixed-precision paths.
pub type Paths64 = Vec<Path64>;

/// Floating-point path used at the float boundary.
pub type PathD = Vec<PointD>;

/// Collection of floating-point paths.
pub type PathsD = Vec<PathD>;
