use std::cmp::Ordering;

use tracing::trace;

use crate::geometry::{Path64, Paths64};
use crate::math::polygon_2d::{cross_product, strip_duplicates};
use crate::math::{round_point, Point64};

use super::contour;
use super::fill_rule::FillRule;
use super::union::SimplifyUnion;

/// [`SimplifyUnion`] computed on the integer grid by a scanbeam sweep.
///
/// Every non-horizontal edge is kept in an active list ordered by `x`; the
/// winding number of each gap in the list is the sum of the edge windings to
/// its right, so only edges that separate a filled gap from an unfilled one
/// are boundary. Boundary pieces are cut where edges cross or meet, joined
/// along scanlines where the fill changes across a horizontal, and traced
/// into loops. Input vertices come back unchanged; crossing points are
/// rounded to the nearest grid point.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepUnion;

impl SweepUnion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SimplifyUnion for SweepUnion {
    fn simplify_union(&self, paths: &[Path64], fill_rule: FillRule) -> Paths64 {
        let mut sweep = Sweep::new(paths, fill_rule);
        sweep.run();
        let result = contour::assemble(&sweep.pieces);
        trace!(
            input = paths.len(),
            edges = sweep.edges.len(),
            pieces = sweep.pieces.len(),
            output = result.len(),
            "sweep union"
        );
        result
    }
}

/// Start of an open boundary piece on an active edge.
#[derive(Debug, Clone, Copy)]
struct Piece {
    start: Point64,
    /// The filled side is to the left in `x`, so the piece runs bottom to
    /// top.
    upward: bool,
}

#[derive(Debug, Clone)]
struct SweepEdge {
    bot: Point64,
    top: Point64,
    /// `+1` when the path runs from `bot` to `top`, `-1` otherwise.
    wind_dx: i32,
    /// Winding number of the gap immediately to the right.
    wind_right: i32,
    curr_x: i64,
    piece: Option<Piece>,
}

impl SweepEdge {
    fn new(from: Point64, to: Point64) -> Self {
        let (bot, top, wind_dx) = if from.y < to.y { (from, to, 1) } else { (to, from, -1) };
        Self {
            bot,
            top,
            wind_dx,
            wind_right: 0,
            curr_x: bot.x,
            piece: None,
        }
    }

    fn wind_left(&self) -> i32 {
        self.wind_right + self.wind_dx
    }

    /// `x` of the edge at scanline `y`, rounded to the nearest integer.
    #[allow(clippy::cast_possible_truncation)]
    fn x_at(&self, y: i64) -> i64 {
        if y == self.top.y {
            return self.top.x;
        }
        if y == self.bot.y {
            return self.bot.x;
        }
        let dy = i128::from(self.top.y) - i128::from(self.bot.y);
        let dx = i128::from(self.top.x) - i128::from(self.bot.x);
        let num = (i128::from(y) - i128::from(self.bot.y)) * dx;
        (i128::from(self.bot.x) + round_div(num, dy)) as i64
    }

    fn delta(&self) -> (i128, i128) {
        (
            i128::from(self.top.x) - i128::from(self.bot.x),
            i128::from(self.top.y) - i128::from(self.bot.y),
        )
    }
}

/// Division rounding half away from zero; `den` must be positive.
fn round_div(num: i128, den: i128) -> i128 {
    let q = num / den;
    let r = num % den;
    if 2 * r.abs() >= den {
        q + num.signum()
    } else {
        q
    }
}

/// Orders two edges leaving the same point by which lies further left just
/// above it.
fn lean_order(a: &SweepEdge, b: &SweepEdge) -> Ordering {
    let (adx, ady) = a.delta();
    let (bdx, bdy) = b.delta();
    (adx * bdy).cmp(&(bdx * ady))
}

/// A pair of edges whose order flips inside a scanbeam.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    left: usize,
    right: usize,
    pt: Point64,
    /// Unrounded position, used only to order crossings.
    at: (f64, f64),
}

struct Sweep {
    fill_rule: FillRule,
    edges: Vec<SweepEdge>,
    /// Active edge indices ordered by `x`.
    ael: Vec<usize>,
    /// Position of each active edge in `ael`.
    pos: Vec<usize>,
    /// Boundary pieces, each directed with the filled region on its left.
    pieces: Vec<(Point64, Point64)>,
}

impl Sweep {
    fn new(paths: &[Path64], fill_rule: FillRule) -> Self {
        let mut edges = Vec::new();
        for path in paths {
            let path = strip_duplicates(path, true);
            if path.len() < 3 {
                continue;
            }
            let mut prev = path[path.len() - 1];
            for &pt in &path {
                // Horizontals carry no winding; the fill change across them
                // is recovered on the scanline.
                if prev.y != pt.y {
                    edges.push(SweepEdge::new(prev, pt));
                }
                prev = pt;
            }
        }
        let pos = vec![0; edges.len()];
        Self {
            fill_rule,
            edges,
            ael: Vec::new(),
            pos,
            pieces: Vec::new(),
        }
    }

    fn run(&mut self) {
        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.sort_by_key(|&e| self.edges[e].bot.y);
        let mut scanlines: Vec<i64> = self.edges.iter().flat_map(|e| [e.bot.y, e.top.y]).collect();
        scanlines.sort_unstable();
        scanlines.dedup();

        let mut next = 0;
        let mut prev_y = None;
        for y in scanlines {
            if let Some(bot_y) = prev_y {
                self.do_intersections(bot_y, y);
            }
            let first = next;
            while next < order.len() && self.edges[order[next]].bot.y == y {
                next += 1;
            }
            self.do_scanline(y, &order[first..next]);
            prev_y = Some(y);
        }
    }

    /// `Some(upward)` when the edge separates a filled from an unfilled
    /// gap.
    fn boundary_side(&self, left: i32, right: i32) -> Option<bool> {
        let filled_left = self.fill_rule.is_filled(left);
        (filled_left != self.fill_rule.is_filled(right)).then_some(filled_left)
    }

    fn edge_side(&self, e: usize) -> Option<bool> {
        let edge = &self.edges[e];
        self.boundary_side(edge.wind_left(), edge.wind_right)
    }

    fn emit(&mut self, from: Point64, to: Point64) {
        if from != to {
            self.pieces.push((from, to));
        }
    }

    fn close_piece(&mut self, e: usize, pt: Point64) {
        if let Some(piece) = self.edges[e].piece.take() {
            if piece.upward {
                self.emit(piece.start, pt);
            } else {
                self.emit(pt, piece.start);
            }
        }
    }

    fn open_piece(&mut self, e: usize, pt: Point64, side: Option<bool>) {
        self.edges[e].piece = side.map(|upward| Piece { start: pt, upward });
    }

    /// Processes every scanline event at `y`: edges ending, starting or
    /// passing through the same point meet at a node, and horizontal
    /// boundary runs are laid between nodes where the fill differs above
    /// and below.
    fn do_scanline(&mut self, y: i64, starting: &[usize]) {
        for &e in &self.ael {
            let x = self.edges[e].x_at(y);
            self.edges[e].curr_x = x;
        }
        let below = std::mem::take(&mut self.ael);
        let mut above: Vec<usize> = below
            .iter()
            .copied()
            .filter(|&e| self.edges[e].top.y > y)
            .chain(starting.iter().copied())
            .collect();
        above.sort_by(|&a, &b| {
            let (ea, eb) = (&self.edges[a], &self.edges[b]);
            ea.curr_x.cmp(&eb.curr_x).then_with(|| lean_order(ea, eb))
        });

        let mut above_right = vec![0; above.len()];
        let mut acc = 0;
        for (k, &e) in above.iter().enumerate().rev() {
            above_right[k] = acc;
            acc += self.edges[e].wind_dx;
        }

        let rule = self.fill_rule;
        let fill = |w: i32| rule.is_filled(w);
        let (mut i, mut j) = (0, 0);
        let (mut below_gap, mut above_gap) = (0, 0);
        let mut horz: Option<Point64> = None;
        loop {
            let x = match (below.get(i), above.get(j)) {
                (Some(&b), Some(&a)) => self.edges[b].curr_x.min(self.edges[a].curr_x),
                (Some(&b), None) => self.edges[b].curr_x,
                (None, Some(&a)) => self.edges[a].curr_x,
                (None, None) => break,
            };
            let (i0, j0) = (i, j);
            let mut edge_sides = false;
            let below_left = below_gap;
            while i < below.len() && self.edges[below[i]].curr_x == x {
                edge_sides |= self.edge_side(below[i]).is_some();
                below_gap = self.edges[below[i]].wind_right;
                i += 1;
            }
            let above_left = above_gap;
            while j < above.len() && self.edges[above[j]].curr_x == x {
                let e = above[j];
                edge_sides |= self
                    .boundary_side(above_right[j] + self.edges[e].wind_dx, above_right[j])
                    .is_some();
                above_gap = above_right[j];
                j += 1;
            }

            let horz_left = fill(below_left) != fill(above_left);
            let horz_right = fill(below_gap) != fill(above_gap);
            let cut = if !edge_sides {
                horz_left != horz_right || (horz_left && fill(above_left) != fill(above_gap))
            } else if i - i0 == 1 && j - j0 == 1 && below[i0] == above[j0] && !horz_left && !horz_right {
                // A lone edge passing through keeps its piece when its side
                // does not change.
                let e = below[i0];
                self.edge_side(e)
                    != self.boundary_side(above_right[j0] + self.edges[e].wind_dx, above_right[j0])
            } else {
                true
            };
            if !cut {
                continue;
            }

            let pt = Point64::new(x, y);
            if let Some(start) = horz.take() {
                if fill(above_left) {
                    self.emit(start, pt);
                } else {
                    self.emit(pt, start);
                }
            }
            for &e in &below[i0..i] {
                self.close_piece(e, pt);
            }
            for k in j0..j {
                let e = above[k];
                let side = self.boundary_side(above_right[k] + self.edges[e].wind_dx, above_right[k]);
                self.open_piece(e, pt, side);
            }
            if horz_right {
                horz = Some(pt);
            }
        }

        for (k, &e) in above.iter().enumerate() {
            self.edges[e].wind_right = above_right[k];
            self.pos[e] = k;
        }
        self.ael = above;
    }

    /// Swaps every pair of edges whose order changes between `bot_y` and
    /// `top_y`, lowest crossing first.
    fn do_intersections(&mut self, bot_y: i64, top_y: i64) {
        if self.ael.len() < 2 {
            return;
        }
        for &e in &self.ael {
            let x = self.edges[e].x_at(top_y);
            self.edges[e].curr_x = x;
        }
        if self
            .ael
            .windows(2)
            .all(|w| self.edges[w[0]].curr_x <= self.edges[w[1]].curr_x)
        {
            return;
        }

        let mut crossings: Vec<Crossing> = inversions(&self.ael, &self.edges)
            .into_iter()
            .map(|(left, right)| {
                let (pt, at) = crossing_point(&self.edges[left], &self.edges[right], bot_y, top_y);
                Crossing { left, right, pt, at }
            })
            .collect();
        crossings.sort_by(|a, b| a.at.1.total_cmp(&b.at.1).then(a.at.0.total_cmp(&b.at.0)));

        for i in 0..crossings.len() {
            if !self.adjacent(&crossings[i]) {
                // Rounding can misorder crossings; an adjacent pair always
                // remains among the rest.
                match (i + 1..crossings.len()).find(|&k| self.adjacent(&crossings[k])) {
                    Some(k) => crossings.swap(i, k),
                    None => {
                        trace!(bot_y, top_y, "no adjacent crossing left");
                        return;
                    }
                }
            }
            self.cross(crossings[i]);
        }
    }

    fn adjacent(&self, c: &Crossing) -> bool {
        self.pos[c.left].abs_diff(self.pos[c.right]) == 1
    }

    /// Exchanges two adjacent edges at `c.pt`, moving the boundary between
    /// them when the fill around the point changes.
    fn cross(&mut self, c: Crossing) {
        let (l, r) = if self.pos[c.left] < self.pos[c.right] {
            (c.left, c.right)
        } else {
            (c.right, c.left)
        };
        let before = (self.edge_side(l), self.edge_side(r));
        let right_of_pair = self.edges[r].wind_right;
        self.edges[l].wind_right = right_of_pair;
        self.edges[r].wind_right = right_of_pair + self.edges[l].wind_dx;
        let after = (self.edge_side(l), self.edge_side(r));

        let (pl, pr) = (self.pos[l], self.pos[r]);
        self.ael.swap(pl, pr);
        self.pos[l] = pr;
        self.pos[r] = pl;

        let passes = |a: (Option<bool>, Option<bool>), b: (Option<bool>, Option<bool>)| {
            a.0.is_none() && b.0.is_none() && a.1 == b.1
        };
        let flip = |s: (Option<bool>, Option<bool>)| (s.1, s.0);
        // One edge keeps its side and the other never bounds the fill.
        if passes(before, after) || passes(flip(before), flip(after)) {
            return;
        }
        self.close_piece(l, c.pt);
        self.close_piece(r, c.pt);
        self.open_piece(l, c.pt, after.0);
        self.open_piece(r, c.pt, after.1);
    }
}

/// Pairs `(a, b)` with `a` before `b` in `ael` but `a.curr_x > b.curr_x`,
/// found by a bottom-up merge sort.
fn inversions(ael: &[usize], edges: &[SweepEdge]) -> Vec<(usize, usize)> {
    let n = ael.len();
    let mut pairs = Vec::new();
    let mut src = ael.to_vec();
    let mut dst = vec![0; n];
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            let (mut i, mut j, mut k) = (lo, mid, lo);
            while i < mid && j < hi {
                if edges[src[j]].curr_x < edges[src[i]].curr_x {
                    pairs.extend(src[i..mid].iter().map(|&a| (a, src[j])));
                    dst[k] = src[j];
                    j += 1;
                } else {
                    dst[k] = src[i];
                    i += 1;
                }
                k += 1;
            }
            dst[k..k + mid - i].copy_from_slice(&src[i..mid]);
            dst[j..hi].copy_from_slice(&src[j..hi]);
            lo = hi;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    pairs
}

/// Crossing point of two edges, rounded and kept inside the scanbeam,
/// together with its unrounded position.
#[allow(clippy::cast_precision_loss)]
fn crossing_point(a: &SweepEdge, b: &SweepEdge, bot_y: i64, top_y: i64) -> (Point64, (f64, f64)) {
    let o1 = cross_product(&b.bot, &b.top, &a.bot) as f64;
    let o2 = cross_product(&b.bot, &b.top, &a.top) as f64;
    let denom = o1 - o2;
    let at = if denom == 0.0 {
        (a.curr_x as f64, top_y as f64)
    } else {
        let t = o1 / denom;
        let (dx, dy) = a.delta();
        (a.bot.x as f64 + t * dx as f64, a.bot.y as f64 + t * dy as f64)
    };
    let pt = round_point(at.0, at.1);
    if pt.y < bot_y || pt.y > top_y {
        let y = pt.y.clamp(bot_y, top_y);
        return (Point64::new(a.x_at(y), y), at);
    }
    (pt, at)
}
