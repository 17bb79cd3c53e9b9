use super::Point64;

/// Result of locating a point relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygon {
    Inside,
    Outside,
    On,
}

/// Builds a path from a flat `[x0, y0, x1, y1, ...]` coordinate list.
///
/// A trailing unpaired coordinate is ignored.
#[must_use]
pub fn make_path(coords: &[i64]) -> Vec<Point64> {
    coords
        .chunks_exact(2)
        .map(|c| Point64::new(c[0], c[1]))
        .collect()
}

/// Computes the signed area of a closed path (shoelace formula).
///
/// Positive for counter-clockwise paths in a y-up frame, negative for
/// clockwise. Paths with fewer than 3 points have zero area.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn area(path: &[Point64]) -> f64 {
    let n = path.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = &path[n - 1];
    for pt in path {
        sum += (prev.y + pt.y) as f64 * (prev.x - pt.x) as f64;
        prev = pt;
    }
    sum * 0.5
}

/// Sum of the signed areas of all paths.
#[must_use]
pub fn area_paths(paths: &[Vec<Point64>]) -> f64 {
    paths.iter().map(|p| area(p)).sum()
}

/// Returns `true` when the path has non-negative signed area.
#[must_use]
pub fn is_positive(path: &[Point64]) -> bool {
    area(path) >= 0.0
}

/// Exact cross product of `(b - a) x (c - b)`.
///
/// Positive when `a -> b -> c` turns left (counter-clockwise).
#[must_use]
pub fn cross_product(a: &Point64, b: &Point64, c: &Point64) -> i128 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let bcx = i128::from(c.x) - i128::from(b.x);
    let bcy = i128::from(c.y) - i128::from(b.y);
    abx * bcy - aby * bcx
}

/// Returns `true` when the three points lie on a single line.
#[must_use]
pub fn is_collinear(a: &Point64, shared: &Point64, c: &Point64) -> bool {
    cross_product(a, shared, c) == 0
}

/// Removes consecutive duplicate points. For closed paths the closing
/// duplicates (last equal to first) are removed too.
#[must_use]
pub fn strip_duplicates(path: &[Point64], closed: bool) -> Vec<Point64> {
    let mut result: Vec<Point64> = Vec::with_capacity(path.len());
    for pt in path {
        if result.last() != Some(pt) {
            result.push(*pt);
        }
    }
    if closed {
        while result.len() > 1 && result.first() == result.last() {
            result.pop();
        }
    }
    result
}

/// Removes collinear vertices (including zero-width spikes) from a closed
/// path. Returns an empty path when fewer than 3 vertices survive.
#[must_use]
pub fn strip_collinear(path: &[Point64]) -> Vec<Point64> {
    let mut pts = strip_duplicates(path, true);
    let mut i = 0;
    let mut stable = 0;
    while pts.len() >= 3 && stable < pts.len() {
        let n = pts.len();
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        if is_collinear(&pts[prev], &pts[i], &pts[next]) {
            pts.remove(i);
            stable = 0;
            if i >= pts.len() {
                i = 0;
            }
        } else {
            stable += 1;
            i = (i + 1) % n;
        }
    }
    if pts.len() < 3 {
        pts.clear();
    }
    pts
}

/// Returns a copy of the path with its vertex order reversed.
#[must_use]
pub fn reverse_path(path: &[Point64]) -> Vec<Point64> {
    path.iter().rev().copied().collect()
}

/// Locates `pt` relative to the closed polygon `path` using exact integer
/// arithmetic (even-odd crossing test with boundary detection).
#[must_use]
pub fn point_in_polygon(pt: &Point64, path: &[Point64]) -> PointInPolygon {
    let n = path.len();
    if n < 3 {
        return PointInPolygon::Outside;
    }
    let mut inside = false;
    let mut prev = &path[n - 1];
    for curr in path {
        if on_segment(pt, prev, curr) {
            return PointInPolygon::On;
        }
        if (prev.y > pt.y) != (curr.y > pt.y) {
            // Sign of the crossing relative to `pt`, oriented by edge direction.
            let side = cross_product(prev, curr, pt);
            let crosses_right = if curr.y > prev.y { side > 0 } else { side < 0 };
            if crosses_right {
                inside = !inside;
            }
        }
        prev = curr;
    }
    if inside {
        PointInPolygon::Inside
    } else {
        PointInPolygon::Outside
    }
}

fn on_segment(pt: &Point64, a: &Point64, b: &Point64) -> bool {
    if !is_collinear(a, b, pt) {
        return false;
    }
    pt.x >= a.x.min(b.x) && pt.x <= a.x.max(b.x) && pt.y >= a.y.min(b.y) && pt.y <= a.y.max(b.y)
}
