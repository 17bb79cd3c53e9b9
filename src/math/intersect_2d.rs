use super::polygon_2d::cross_product;
use super::{round_point, Point64, PointD, FLOAT_TOLERANCE};

/// Intersection of the infinite lines through `a0..a1` and `b0..b1`.
///
/// Returns `None` when the lines are parallel (or either is degenerate).
#[must_use]
pub fn line_line_intersect_2d(a0: &PointD, a1: &PointD, b0: &PointD, b1: &PointD) -> Option<PointD> {
    let da = a1 - a0;
    let db = b1 - b0;
    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < FLOAT_TOLERANCE {
        return None;
    }
    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    Some(a0 + da * t)
}

/// Intersection point of two segments known to cross, rounded to the fixed
/// grid. Parameters at or beyond the ends snap to the segment endpoints.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_intersect_point(a0: &Point64, a1: &Point64, b0: &Point64, b1: &Point64) -> Option<Point64> {
    let dx1 = (a1.x - a0.x) as f64;
    let dy1 = (a1.y - a0.y) as f64;
    let dx2 = (b1.x - b0.x) as f64;
    let dy2 = (b1.y - b0.y) as f64;
    let det = dy1 * dx2 - dy2 * dx1;
    if det == 0.0 {
        return None;
    }
    let t = ((a0.x - b0.x) as f64 * dy2 - (a0.y - b0.y) as f64 * dx2) / det;
    if t <= 0.0 {
        Some(*a0)
    } else if t >= 1.0 {
        Some(*a1)
    } else {
        Some(round_point(a0.x as f64 + t * dx1, a0.y as f64 + t * dy1))
    }
}

/// Tests whether segment `p1..p2` meets segment `p3..p4` and returns the
/// meeting point.
///
/// Straddle tests are exact. When an endpoint lies on the other segment's
/// line, that endpoint is the intersection and it counts only if it lies
/// strictly between the other segment's ends (or coincides with one).
/// Collinear segments never intersect.
#[must_use]
pub fn segment_intersection(p1: &Point64, p2: &Point64, p3: &Point64, p4: &Point64) -> Option<Point64> {
    let res1 = cross_product(p1, p3, p4);
    let res2 = cross_product(p2, p3, p4);
    if res1 == 0 {
        if res2 == 0 {
            return None;
        }
        return endpoint_touch(p1, p3, p4).then_some(*p1);
    }
    if res2 == 0 {
        return endpoint_touch(p2, p3, p4).then_some(*p2);
    }
    if (res1 > 0) == (res2 > 0) {
        return None;
    }

    let res3 = cross_product(p3, p1, p2);
    let res4 = cross_product(p4, p1, p2);
    if res3 == 0 {
        return endpoint_touch(p3, p1, p2).then_some(*p3);
    }
    if res4 == 0 {
        return endpoint_touch(p4, p1, p2).then_some(*p4);
    }
    if (res3 > 0) == (res4 > 0) {
        return None;
    }

    segment_intersect_point(p1, p2, p3, p4)
}

/// `pt` is known to be on the line through `a..b`; checks it lies within the
/// segment (endpoints included).
fn endpoint_touch(pt: &Point64, a: &Point64, b: &Point64) -> bool {
    if pt == a || pt == b {
        return true;
    }
    if a.y == b.y {
        (pt.x > a.x) == (pt.x < b.x)
    } else {
        (pt.y > a.y) == (pt.y < b.y)
    }
}

/// Reflects `pt` through `pivot`.
#[must_use]
pub fn reflect_point(pt: &PointD, pivot: &PointD) -> PointD {
    PointD::new(pivot.x + (pivot.x - pt.x), pivot.y + (pivot.y - pt.y))
}
