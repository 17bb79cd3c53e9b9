use crate::geometry::Rect64;
use crate::math::polygon_2d::{cross_product, point_in_polygon, PointInPolygon};
use crate::math::Point64;

/// Position of a point relative to the clip rectangle. The four sides are
/// ordered clockwise (in a y-down view) so that `+1 mod 4` steps to the
/// next side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Location {
    Left,
    Top,
    Right,
    Bottom,
    Inside,
}

impl Location {
    const SIDES: [Location; 4] = [Location::Left, Location::Top, Location::Right, Location::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The neighbouring side, clockwise or anticlockwise.
    pub fn adjacent(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { 3 };
        Self::SIDES[(self.index() + step) % 4]
    }

    /// `curr` is the side clockwise after `self`.
    pub fn heading_clockwise(self, curr: Self) -> bool {
        (self.index() + 1) % 4 == curr.index()
    }

    pub fn is_opposite(self, curr: Self) -> bool {
        self.index().abs_diff(curr.index()) == 2
    }
}

/// Locates `pt` relative to `rect`. The flag is `false` when the point lies
/// on the rectangle's boundary (the location then names that side).
pub(super) fn get_location(rect: &Rect64, pt: &Point64) -> (Location, bool) {
    let within_y = pt.y >= rect.top && pt.y <= rect.bottom;
    let within_x = pt.x >= rect.left && pt.x <= rect.right;
    if pt.x == rect.left && within_y {
        (Location::Left, false)
    } else if pt.x == rect.right && within_y {
        (Location::Right, false)
    } else if pt.y == rect.top && within_x {
        (Location::Top, false)
    } else if pt.y == rect.bottom && within_x {
        (Location::Bottom, false)
    } else if pt.x < rect.left {
        (Location::Left, true)
    } else if pt.x > rect.right {
        (Location::Right, true)
    } else if pt.y < rect.top {
        (Location::Top, true)
    } else if pt.y > rect.bottom {
        (Location::Bottom, true)
    } else {
        (Location::Inside, true)
    }
}

/// Turning direction when the path moves from side `prev` to side `curr`.
/// Opposite sides are disambiguated by which way the path passes the
/// rectangle's midpoint.
pub(super) fn is_clockwise(
    prev: Location,
    curr: Location,
    prev_pt: &Point64,
    curr_pt: &Point64,
    rect_mid: &Point64,
) -> bool {
    if prev.is_opposite(curr) {
        cross_product(prev_pt, rect_mid, curr_pt) < 0
    } else {
        prev.heading_clockwise(curr)
    }
}

/// Net turning direction of the sides visited while the path stayed outside.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn start_locs_are_clockwise(locs: &[Location]) -> bool {
    let mut turns = 0;
    for pair in locs.windows(2) {
        match pair[1].index() as isize - pair[0].index() as isize {
            -1 | 3 => turns -= 1,
            1 | -3 => turns += 1,
            _ => {}
        }
    }
    turns > 0
}

/// Bit set of the rectangle sides `pt` lies on: left 1, top 2, right 4,
/// bottom 8.
pub(super) fn edges_for_pt(pt: &Point64, rect: &Rect64) -> u32 {
    let mut result = 0;
    if pt.x == rect.left {
        result = 1;
    } else if pt.x == rect.right {
        result = 4;
    }
    if pt.y == rect.top {
        result += 2;
    } else if pt.y == rect.bottom {
        result += 8;
    }
    result
}

/// Whether travelling `pt1 -> pt2` along side `edge_idx` runs clockwise.
pub(super) fn is_heading_clockwise(pt1: &Point64, pt2: &Point64, edge_idx: usize) -> bool {
    match edge_idx {
        0 => pt2.y < pt1.y,
        1 => pt2.x > pt1.x,
        2 => pt2.y > pt1.y,
        _ => pt2.x < pt1.x,
    }
}

pub(super) fn has_horz_overlap(left1: &Point64, right1: &Point64, left2: &Point64, right2: &Point64) -> bool {
    left1.x < right2.x && right1.x > left2.x
}

pub(super) fn has_vert_overlap(top1: &Point64, bottom1: &Point64, top2: &Point64, bottom2: &Point64) -> bool {
    top1.y < bottom2.y && bottom1.y > top2.y
}

/// `outer` encloses `inner`, given the two do not cross.
pub(super) fn path_contains_path(outer: &[Point64], inner: &[Point64]) -> bool {
    let mut io_count: i32 = 0;
    for pt in inner {
        match point_in_polygon(pt, outer) {
            PointInPolygon::Outside => io_count += 1,
            PointInPolygon::Inside => io_count -= 1,
            PointInPolygon::On => continue,
        }
        if io_count.abs() > 1 {
            break;
        }
    }
    io_count <= 0
}
