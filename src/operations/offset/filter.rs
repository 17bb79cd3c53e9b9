use std::collections::HashMap;

use crate::geometry::{Path64, Paths64};
use crate::math::polygon_2d::{area, strip_collinear, strip_duplicates};
use crate::math::Point64;

/// Splits the unioned contours into simple loops and drops degenerate ones.
///
/// Loops with fewer than 3 points, less than one unit of area, or that are
/// triangles pinched to a single grid cell are removed. Collinear vertices
/// are removed unless `preserve_collinear` is set.
#[must_use]
pub fn apply(unioned: &[Path64], preserve_collinear: bool) -> Paths64 {
    let mut result = Vec::with_capacity(unioned.len());
    for contour in unioned {
        for part in split_at_repeated_vertices(contour) {
            let path = if preserve_collinear {
                strip_duplicates(&part, true)
            } else {
                strip_collinear(&part)
            };
            if path.len() < 3 || area(&path).abs() < 1.0 || is_very_small_triangle(&path) {
                continue;
            }
            result.push(path);
        }
    }
    result
}

/// Breaks a contour that touches itself into loops, one per repeated
/// vertex.
fn split_at_repeated_vertices(path: &[Point64]) -> Paths64 {
    let mut loops = Vec::new();
    let mut stack: Path64 = Vec::with_capacity(path.len());
    let mut seen: HashMap<(i64, i64), usize> = HashMap::new();
    for pt in path {
        if let Some(&start) = seen.get(&(pt.x, pt.y)) {
            let pinched: Path64 = stack.drain(start..).collect();
            for p in &pinched {
                seen.remove(&(p.x, p.y));
            }
            loops.push(pinched);
        }
        seen.insert((pt.x, pt.y), stack.len());
        stack.push(*pt);
    }
    if !stack.is_empty() {
        loops.push(stack);
    }
    loops
}

/// A triangle with two vertices less than two units apart on both axes.
/// Rounding crossing points leaves these behind where offset edges fold
/// over each other.
fn is_very_small_triangle(path: &[Point64]) -> bool {
    path.len() == 3
        && (0..3).any(|i| {
            let (a, b) = (&path[i], &path[(i + 1) % 3]);
            (a.x - b.x).abs() < 2 && (a.y - b.y).abs() < 2
        })
}
