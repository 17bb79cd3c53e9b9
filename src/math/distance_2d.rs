use super::{to_point_d, Point64, PointD};

/// Returns the minimum distance from `pt` to the segment `a..b`.
#[must_use]
pub fn point_to_segment_dist(pt: &PointD, a: &PointD, b: &PointD) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (pt - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((pt - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (pt - (a + d * t)).norm()
}

/// Returns the minimum distance from `pt` to the boundary of a closed path.
///
/// Returns `f64::INFINITY` for an empty path.
#[must_use]
pub fn point_to_path_dist(pt: &PointD, path: &[Point64]) -> f64 {
    match path {
        [] => f64::INFINITY,
        [only] => (pt - to_point_d(only)).norm(),
        _ => {
            let mut best = f64::INFINITY;
            let mut prev = to_point_d(&path[path.len() - 1]);
            for p in path {
                let curr = to_point_d(p);
                best = best.min(point_to_segment_dist(pt, &prev, &curr));
                prev = curr;
            }
            best
        }
    }
}

/// Euclidean distance between two fixed-precision points.
#[must_use]
pub fn distance(a: &Point64, b: &Point64) -> f64 {
    (to_point_d(a) - to_point_d(b)).norm()
}
