use crate::geometry::{Path64, Rect64};
use crate::math::intersect_2d::segment_intersection;
use crate::math::Point64;

use super::location::{
    edges_for_pt, get_location, has_horz_overlap, has_vert_overlap, is_clockwise,
    is_heading_clockwise, path_contains_path, start_locs_are_clockwise, Location,
};
use super::out_pt::{OutPtId, OutPtStore};

/// Working state for clipping one path at a time against a rectangle.
///
/// Output rings live in an [`OutPtStore`]; `results` holds one entry per
/// ring (emptied when rings are merged) and `edges` registers the ring
/// vertices lying on each rectangle side, clockwise and anticlockwise
/// lists interleaved (`side * 2`, `side * 2 + 1`).
#[derive(Debug)]
pub(super) struct ClipEngine {
    rect: Rect64,
    rect_path: [Point64; 4],
    rect_mid: Point64,
    path_bounds: Rect64,
    ops: OutPtStore,
    results: Vec<Option<OutPtId>>,
    edges: [Vec<Option<OutPtId>>; 8],
    start_locs: Vec<Location>,
}

impl ClipEngine {
    pub fn new(rect: Rect64) -> Self {
        let corners = rect.as_path();
        Self {
            rect,
            rect_path: [corners[0], corners[1], corners[2], corners[3]],
            rect_mid: rect.mid_point(),
            path_bounds: Rect64::default(),
            ops: OutPtStore::default(),
            results: Vec::new(),
            edges: Default::default(),
            start_locs: Vec::new(),
        }
    }

    /// Clears all per-path state.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.results.clear();
        for edge in &mut self.edges {
            edge.clear();
        }
        self.start_locs.clear();
    }

    /// Clips one closed path, returning its clipped rings.
    pub fn clip_polygon(&mut self, path: &[Point64], bounds: Rect64) -> Vec<Path64> {
        self.reset();
        self.path_bounds = bounds;
        self.execute_polygon(path);
        self.check_edges();
        for side in 0..4 {
            self.tidy_edges(side);
        }
        let mut out = Vec::new();
        for i in 0..self.results.len() {
            let path = self.take_polygon_path(i);
            if !path.is_empty() {
                out.push(path);
            }
        }
        out
    }

    /// Clips one open path, returning its inside portions.
    pub fn clip_line(&mut self, path: &[Point64]) -> Vec<Path64> {
        self.reset();
        self.execute_line(path);
        self.results
            .iter()
            .flatten()
            .filter_map(|&op| {
                if self.ops[op].next == op {
                    return None;
                }
                // Rings end at the last added vertex, so start after it.
                Some(self.ops.ring_points(self.ops[op].next))
            })
            .collect()
    }

    fn add(&mut self, pt: Point64, start_new: bool) -> OutPtId {
        let curr_idx = self.results.len();
        if curr_idx == 0 || start_new {
            let id = self.ops.new_ring(pt, curr_idx);
            self.results.push(Some(id));
            return id;
        }
        let owner = curr_idx - 1;
        match self.results[owner] {
            Some(prev) if self.ops[prev].pt == pt => prev,
            Some(prev) => {
                let id = self.ops.insert_after(prev, pt, owner);
                self.results[owner] = Some(id);
                id
            }
            None => {
                let id = self.ops.new_ring(pt, owner);
                self.results[owner] = Some(id);
                id
            }
        }
    }

    fn add_corner(&mut self, prev: Location, curr: Location) {
        let corner = if prev.heading_clockwise(curr) {
            self.rect_path[prev.index()]
        } else {
            self.rect_path[curr.index()]
        };
        self.add(corner, false);
    }

    /// Adds the corner passed when stepping from `loc` to its neighbour and
    /// returns the neighbour.
    fn add_corner_step(&mut self, loc: Location, clockwise: bool) -> Location {
        if clockwise {
            self.add(self.rect_path[loc.index()], false);
            loc.adjacent(true)
        } else {
            let next = loc.adjacent(false);
            self.add(self.rect_path[next.index()], false);
            next
        }
    }

    /// Intersection of segment `p..p2` with the rectangle side nearest `p`,
    /// trying the side named by `loc` first. On success `loc` is updated to
    /// the side actually crossed.
    fn get_intersection(&self, p: &Point64, p2: &Point64, loc: &mut Location) -> Option<Point64> {
        let r = &self.rect_path;
        let cross = |a: usize, b: usize| segment_intersection(p, p2, &r[a], &r[b]);
        let (found, new_loc) = match *loc {
            Location::Left => {
                if let Some(ip) = cross(0, 3) {
                    (Some(ip), Location::Left)
                } else if p.y < r[0].y {
                    match cross(0, 1) {
                        Some(ip) => (Some(ip), Location::Top),
                        None => (cross(2, 3), Location::Bottom),
                    }
                } else {
                    (cross(2, 3), Location::Bottom)
                }
            }
            Location::Top => {
                if let Some(ip) = cross(0, 1) {
                    (Some(ip), Location::Top)
                } else if p.x < r[0].x {
                    match cross(0, 3) {
                        Some(ip) => (Some(ip), Location::Left),
                        None => (cross(1, 2), Location::Right),
                    }
                } else {
                    (cross(1, 2), Location::Right)
                }
            }
            Location::Right => {
                if let Some(ip) = cross(1, 2) {
                    (Some(ip), Location::Right)
                } else if p.y < r[1].y {
                    match cross(0, 1) {
                        Some(ip) => (Some(ip), Location::Top),
                        None => (cross(2, 3), Location::Bottom),
                    }
                } else {
                    (cross(2, 3), Location::Bottom)
                }
            }
            Location::Bottom => {
                if let Some(ip) = cross(2, 3) {
                    (Some(ip), Location::Bottom)
                } else if p.x < r[3].x {
                    match cross(0, 3) {
                        Some(ip) => (Some(ip), Location::Left),
                        None => (cross(1, 2), Location::Right),
                    }
                } else {
                    (cross(1, 2), Location::Right)
                }
            }
            Location::Inside => {
                if let Some(ip) = cross(0, 3) {
                    (Some(ip), Location::Left)
                } else if let Some(ip) = cross(0, 1) {
                    (Some(ip), Location::Top)
                } else if let Some(ip) = cross(1, 2) {
                    (Some(ip), Location::Right)
                } else {
                    (cross(2, 3), Location::Bottom)
                }
            }
        };
        if found.is_some() {
            *loc = new_loc;
        }
        found
    }

    /// Advances `i` past vertices staying on the side of `loc`, adding
    /// inside vertices as they are passed, and updates `loc` to where the
    /// path goes next.
    fn get_next_location(&mut self, path: &[Point64], loc: &mut Location, i: &mut usize) {
        let rect = self.rect;
        let n = path.len();
        match *loc {
            Location::Left => {
                while *i < n && path[*i].x <= rect.left {
                    *i += 1;
                }
                if *i < n {
                    let pt = path[*i];
                    *loc = if pt.x >= rect.right {
                        Location::Right
                    } else if pt.y <= rect.top {
                        Location::Top
                    } else if pt.y >= rect.bottom {
                        Location::Bottom
                    } else {
                        Location::Inside
                    };
                }
            }
            Location::Top => {
                while *i < n && path[*i].y <= rect.top {
                    *i += 1;
                }
                if *i < n {
                    let pt = path[*i];
                    *loc = if pt.y >= rect.bottom {
                        Location::Bottom
                    } else if pt.x <= rect.left {
                        Location::Left
                    } else if pt.x >= rect.right {
                        Location::Right
                    } else {
                        Location::Inside
                    };
                }
            }
            Location::Right => {
                while *i < n && path[*i].x >= rect.right {
                    *i += 1;
                }
                if *i < n {
                    let pt = path[*i];
                    *loc = if pt.x <= rect.left {
                        Location::Left
                    } else if pt.y <= rect.top {
                        Location::Top
                    } else if pt.y >= rect.bottom {
                        Location::Bottom
                    } else {
                        Location::Inside
                    };
                }
            }
            Location::Bottom => {
                while *i < n && path[*i].y >= rect.bottom {
                    *i += 1;
                }
                if *i < n {
                    let pt = path[*i];
                    *loc = if pt.y <= rect.top {
                        Location::Top
                    } else if pt.x <= rect.left {
                        Location::Left
                    } else if pt.x >= rect.right {
                        Location::Right
                    } else {
                        Location::Inside
                    };
                }
            }
            Location::Inside => {
                while *i < n {
                    let pt = path[*i];
                    if pt.x < rect.left {
                        *loc = Location::Left;
                    } else if pt.x > rect.right {
                        *loc = Location::Right;
                    } else if pt.y > rect.bottom {
                        *loc = Location::Bottom;
                    } else if pt.y < rect.top {
                        *loc = Location::Top;
                    } else {
                        self.add(pt, false);
                        *i += 1;
                        continue;
                    }
                    break;
                }
            }
        }
    }

    /// Location of the first point in `pts` that is off the rectangle
    /// boundary, or `None` when every point lies on it.
    fn first_off_edge<'p>(&self, pts: impl Iterator<Item = &'p Point64>) -> Option<Location> {
        pts.map(|pt| get_location(&self.rect, pt))
            .find(|&(_, off)| off)
            .map(|(loc, _)| loc)
    }

    fn execute_polygon(&mut self, path: &[Point64]) {
        let Some(&last) = path.last() else {
            return;
        };
        let high = path.len() - 1;
        let mut prev;
        let mut crossing_loc = Location::Inside;
        let mut first_cross = Location::Inside;

        let (mut loc, off_edge) = get_location(&self.rect, &last);
        if !off_edge {
            // The last vertex is on the boundary; look back for one that isn't.
            let Some(off_loc) = self.first_off_edge(path[..high].iter().rev()) else {
                for pt in path {
                    self.add(*pt, false);
                }
                return;
            };
            if off_loc == Location::Inside {
                loc = Location::Inside;
            }
        }
        let starting_loc = loc;

        let mut i = 0;
        while i <= high {
            prev = loc;
            let crossing_prev = crossing_loc;

            self.get_next_location(path, &mut loc, &mut i);
            if i > high {
                break;
            }
            let prev_pt = if i == 0 { path[high] } else { path[i - 1] };

            crossing_loc = loc;
            let Some(ip) = self.get_intersection(&path[i], &prev_pt, &mut crossing_loc) else {
                // Still outside.
                if crossing_prev == Location::Inside {
                    let clockwise = is_clockwise(prev, loc, &prev_pt, &path[i], &self.rect_mid);
                    loop {
                        self.start_locs.push(prev);
                        prev = prev.adjacent(clockwise);
                        if prev == loc {
                            break;
                        }
                    }
                    crossing_loc = crossing_prev;
                } else if prev != Location::Inside && prev != loc {
                    let clockwise = is_clockwise(prev, loc, &prev_pt, &path[i], &self.rect_mid);
                    loop {
                        prev = self.add_corner_step(prev, clockwise);
                        if prev == loc {
                            break;
                        }
                    }
                }
                i += 1;
                continue;
            };

            // Crossing the rectangle boundary.
            if loc == Location::Inside {
                // Entering.
                if first_cross == Location::Inside {
                    first_cross = crossing_loc;
                    self.start_locs.push(prev);
                } else if prev != crossing_loc {
                    let clockwise =
                        is_clockwise(prev, crossing_loc, &prev_pt, &path[i], &self.rect_mid);
                    loop {
                        prev = self.add_corner_step(prev, clockwise);
                        if prev == crossing_loc {
                            break;
                        }
                    }
                }
            } else if prev != Location::Inside {
                // Passing straight through: `ip` is the exit point, find the
                // entry point too.
                loc = prev;
                let ip2 = self
                    .get_intersection(&prev_pt, &path[i], &mut loc)
                    .unwrap_or(prev_pt);
                if crossing_prev != Location::Inside && crossing_prev != loc {
                    self.add_corner(crossing_prev, loc);
                }
                if first_cross == Location::Inside {
                    first_cross = loc;
                    self.start_locs.push(prev);
                }
                loc = crossing_loc;
                self.add(ip2, false);
                if ip == ip2 {
                    // path[i] is on the rectangle.
                    loc = get_location(&self.rect, &path[i]).0;
                    self.add_corner(crossing_loc, loc);
                    crossing_loc = loc;
                    continue;
                }
            } else {
                // Exiting.
                loc = crossing_loc;
                if first_cross == Location::Inside {
                    first_cross = crossing_loc;
                }
            }
            self.add(ip, false);
        }

        if first_cross == Location::Inside {
            // Never crossed; an outside path may still enclose the rectangle.
            if starting_loc != Location::Inside
                && self.path_bounds.contains_rect(&self.rect)
                && path_contains_path(path, &self.rect_path)
            {
                let clockwise = start_locs_are_clockwise(&self.start_locs);
                for j in 0..4 {
                    let k = if clockwise { j } else { 3 - j };
                    self.add(self.rect_path[k], false);
                    if let Some(first) = self.results[0] {
                        self.add_to_edge(k * 2, first);
                    }
                }
            }
        } else if loc != Location::Inside && (loc != first_cross || self.start_locs.len() > 2) {
            if !self.start_locs.is_empty() {
                prev = loc;
                let start_locs = std::mem::take(&mut self.start_locs);
                for &loc2 in &start_locs {
                    if prev == loc2 {
                        continue;
                    }
                    self.add_corner_step(prev, prev.heading_clockwise(loc2));
                    prev = loc2;
                }
                self.start_locs = start_locs;
                loc = prev;
            }
            if loc != first_cross {
                self.add_corner_step(loc, loc.heading_clockwise(first_cross));
            }
        }
    }

    fn execute_line(&mut self, path: &[Point64]) {
        if path.len() < 2 || self.rect.is_empty() {
            return;
        }
        let high = path.len() - 1;
        let mut i = 1;

        let (mut loc, off_edge) = get_location(&self.rect, &path[0]);
        if !off_edge {
            let Some(off_loc) = self.first_off_edge(path[1..].iter()) else {
                for pt in path {
                    self.add(*pt, false);
                }
                return;
            };
            if off_loc == Location::Inside {
                loc = Location::Inside;
            }
        }
        if loc == Location::Inside {
            self.add(path[0], false);
        }

        while i <= high {
            let prev = loc;
            self.get_next_location(path, &mut loc, &mut i);
            if i > high {
                break;
            }
            let prev_pt = path[i - 1];

            let mut crossing_loc = loc;
            let Some(ip) = self.get_intersection(&path[i], &prev_pt, &mut crossing_loc) else {
                i += 1;
                continue;
            };

            if loc == Location::Inside {
                // Entering.
                self.add(ip, true);
            } else if prev != Location::Inside {
                // Passing straight through.
                crossing_loc = prev;
                let ip2 = self
                    .get_intersection(&prev_pt, &path[i], &mut crossing_loc)
                    .unwrap_or(prev_pt);
                self.add(ip2, true);
                self.add(ip, false);
            } else {
                // Exiting.
                self.add(ip, false);
            }
        }
    }

    fn add_to_edge(&mut self, edge_idx: usize, op: OutPtId) {
        if self.ops[op].edge.is_some() {
            return;
        }
        self.ops[op].edge = Some(edge_idx);
        self.edges[edge_idx].push(Some(op));
    }

    fn uncouple_edge(&mut self, op: OutPtId) {
        let Some(edge_idx) = self.ops[op].edge else {
            return;
        };
        if let Some(slot) = self.edges[edge_idx].iter_mut().find(|slot| **slot == Some(op)) {
            *slot = None;
        }
        self.ops[op].edge = None;
    }

    /// Removes collinear vertices from every ring and registers the
    /// remaining vertices on the rectangle sides they run along.
    fn check_edges(&mut self) {
        for i in 0..self.results.len() {
            let Some(mut op) = self.results[i] else {
                continue;
            };
            let mut op2 = Some(op);
            while let Some(curr) = op2 {
                if self.ops.is_collinear_at(curr) {
                    if curr == op {
                        op2 = self.ops.unlink_back(curr);
                        match op2 {
                            Some(back) => op = self.ops[back].prev,
                            None => break,
                        }
                    } else {
                        op2 = self.ops.unlink_back(curr);
                    }
                } else {
                    op2 = Some(self.ops[curr].next);
                }
                if op2 == Some(op) {
                    break;
                }
            }

            if op2.is_none() {
                self.results[i] = None;
                continue;
            }
            self.results[i] = Some(op);

            let mut edge_set1 = edges_for_pt(&self.ops[self.ops[op].prev].pt, &self.rect);
            let mut curr = op;
            loop {
                let edge_set2 = edges_for_pt(&self.ops[curr].pt, &self.rect);
                if edge_set2 != 0 && self.ops[curr].edge.is_none() {
                    let combined = edge_set1 & edge_set2;
                    for j in 0..4 {
                        if combined & (1 << j) != 0 {
                            let prev_pt = self.ops[self.ops[curr].prev].pt;
                            if is_heading_clockwise(&prev_pt, &self.ops[curr].pt, j) {
                                self.add_to_edge(j * 2, curr);
                            } else {
                                self.add_to_edge(j * 2 + 1, curr);
                            }
                        }
                    }
                }
                edge_set1 = edge_set2;
                curr = self.ops[curr].next;
                if curr == op {
                    break;
                }
            }
        }
    }

    fn live(&self, slot: Option<OutPtId>) -> Option<OutPtId> {
        slot.filter(|&op| !self.ops.is_degenerate(op))
    }

    /// Splits rings that double back along rectangle side `side` and
    /// rejoins rings that share a stretch of it.
    #[allow(clippy::too_many_lines)]
    fn tidy_edges(&mut self, side: usize) {
        let cw_idx = side * 2;
        let ccw_idx = side * 2 + 1;
        if self.edges[ccw_idx].is_empty() {
            return;
        }
        let is_horz = side == 1 || side == 3;
        let cw_is_toward_larger = side == 1 || side == 2;
        let mut i = 0;
        let mut j = 0;

        while i < self.edges[cw_idx].len() {
            let Some(cw_op) = self.live(self.edges[cw_idx][i]) else {
                self.edges[cw_idx][i] = None;
                i += 1;
                j = 0;
                continue;
            };

            let j_lim = self.edges[ccw_idx].len();
            while j < j_lim && self.live(self.edges[ccw_idx][j]).is_none() {
                j += 1;
            }
            if j == j_lim {
                i += 1;
                j = 0;
                continue;
            }
            let Some(ccw_op) = self.edges[ccw_idx][j] else {
                j += 1;
                continue;
            };

            let (p1, p1a, p2, p2a) = if cw_is_toward_larger {
                (self.ops[cw_op].prev, cw_op, ccw_op, self.ops[ccw_op].prev)
            } else {
                (cw_op, self.ops[cw_op].prev, self.ops[ccw_op].prev, ccw_op)
            };

            let overlap = if is_horz {
                has_horz_overlap(
                    &self.ops[p1].pt,
                    &self.ops[p1a].pt,
                    &self.ops[p2].pt,
                    &self.ops[p2a].pt,
                )
            } else {
                has_vert_overlap(
                    &self.ops[p1].pt,
                    &self.ops[p1a].pt,
                    &self.ops[p2].pt,
                    &self.ops[p2a].pt,
                )
            };
            if !overlap {
                j += 1;
                continue;
            }

            // Splitting one ring or rejoining two.
            let is_rejoining = self.ops[cw_op].owner_idx != self.ops[ccw_op].owner_idx;
            if is_rejoining {
                let p2_owner = self.ops[p2].owner_idx;
                self.results[p2_owner] = None;
                let p1_owner = self.ops[p1].owner_idx;
                self.ops.set_new_owner(p2, p1_owner);
            }

            if cw_is_toward_larger {
                self.ops[p1].next = p2;
                self.ops[p2].prev = p1;
                self.ops[p1a].prev = p2a;
                self.ops[p2a].next = p1a;
            } else {
                self.ops[p1].prev = p2;
                self.ops[p2].next = p1;
                self.ops[p1a].next = p2a;
                self.ops[p2a].prev = p1a;
            }

            if !is_rejoining {
                let new_idx = self.results.len();
                self.results.push(Some(p1a));
                self.ops.set_new_owner(p1a, new_idx);
            }

            let (op, op2) = if cw_is_toward_larger { (p2, p1a) } else { (p1, p2a) };
            let op_owner = self.ops[op].owner_idx;
            self.results[op_owner] = Some(op);
            let op2_owner = self.ops[op2].owner_idx;
            self.results[op2_owner] = Some(op2);

            let larger = |ops: &OutPtStore, id: OutPtId| {
                let prev = ops[ops[id].prev].pt;
                if is_horz {
                    ops[id].pt.x > prev.x
                } else {
                    ops[id].pt.y > prev.y
                }
            };
            let collapsed = |ops: &OutPtStore, id: OutPtId| {
                ops.is_degenerate(id) || ops[id].pt == ops[ops[id].prev].pt
            };
            let op_is_larger = larger(&self.ops, op);
            let op2_is_larger = larger(&self.ops, op2);

            if collapsed(&self.ops, op) {
                if op2_is_larger == cw_is_toward_larger {
                    self.edges[cw_idx][i] = Some(op2);
                    self.edges[ccw_idx][j] = None;
                    j += 1;
                } else {
                    self.edges[ccw_idx][j] = Some(op2);
                    self.edges[cw_idx][i] = None;
                    i += 1;
                }
            } else if collapsed(&self.ops, op2) {
                if op_is_larger == cw_is_toward_larger {
                    self.edges[cw_idx][i] = Some(op);
                    self.edges[ccw_idx][j] = None;
                    j += 1;
                } else {
                    self.edges[ccw_idx][j] = Some(op);
                    self.edges[cw_idx][i] = None;
                    i += 1;
                }
            } else if op_is_larger == op2_is_larger {
                if op_is_larger == cw_is_toward_larger {
                    self.edges[cw_idx][i] = Some(op);
                    self.uncouple_edge(op2);
                    self.add_to_edge(cw_idx, op2);
                    self.edges[ccw_idx][j] = None;
                    j += 1;
                } else {
                    self.edges[cw_idx][i] = None;
                    i += 1;
                    self.edges[ccw_idx][j] = Some(op2);
                    self.uncouple_edge(op);
                    self.add_to_edge(ccw_idx, op);
                    j = 0;
                }
            } else {
                if op_is_larger == cw_is_toward_larger {
                    self.edges[cw_idx][i] = Some(op);
                } else {
                    self.edges[ccw_idx][j] = Some(op);
                }
                if op2_is_larger == cw_is_toward_larger {
                    self.edges[cw_idx][i] = Some(op2);
                } else {
                    self.edges[ccw_idx][j] = Some(op2);
                }
            }
        }
    }

    /// Extracts ring `idx` as a path, dropping collinear vertices. Rings of
    /// fewer than three vertices yield an empty path.
    fn take_polygon_path(&mut self, idx: usize) -> Path64 {
        let Some(mut op) = self.results[idx] else {
            return Vec::new();
        };
        if self.ops.is_degenerate(op) {
            return Vec::new();
        }
        let mut op2 = Some(self.ops[op].next);
        while let Some(curr) = op2 {
            if curr == op {
                break;
            }
            if self.ops.is_collinear_at(curr) {
                op = self.ops[curr].prev;
                op2 = self.ops.unlink(curr);
            } else {
                op2 = Some(self.ops[curr].next);
            }
        }
        self.results[idx] = op2;
        // Start after the most recent point so the ring keeps insertion order.
        match op2 {
            Some(last) => self.ops.ring_points(self.ops[last].next),
            None => Vec::new(),
        }
    }
}
