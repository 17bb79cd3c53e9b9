use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::trace;

use crate::geometry::{Path64, Paths64, Rect64};
use crate::math::polygon_2d::{area, cross_product, point_in_polygon, PointInPolygon};
use crate::math::Point64;

type Key = (i64, i64);

fn key(pt: &Point64) -> Key {
    (pt.x, pt.y)
}

/// Joins directed boundary pieces into closed paths: outer contours
/// positive, each followed by the holes it directly encloses.
///
/// Every piece must have the filled region on its left, and every vertex
/// as many pieces leaving as arriving.
pub(super) fn assemble(pieces: &[(Point64, Point64)]) -> Paths64 {
    nest(trace_loops(pieces))
}

/// Walks the pieces into simple loops. At a vertex shared by several loops
/// the walk takes the sharpest left turn, so touching loops come apart.
fn trace_loops(pieces: &[(Point64, Point64)]) -> Paths64 {
    let mut outgoing: HashMap<Key, Vec<usize>> = HashMap::new();
    for (i, (from, _)) in pieces.iter().enumerate() {
        outgoing.entry(key(from)).or_default().push(i);
    }
    let mut used = vec![false; pieces.len()];
    let mut loops = Vec::new();

    for first in 0..pieces.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let (mut prev, mut cur) = pieces[first];
        let mut stack: Path64 = vec![prev];
        let mut seen: HashMap<Key, usize> = HashMap::from([(key(&prev), 0)]);
        loop {
            if let Some(&start) = seen.get(&key(&cur)) {
                let closed: Path64 = stack.drain(start..).collect();
                for pt in &closed {
                    seen.remove(&key(pt));
                }
                loops.push(closed);
                if stack.is_empty() {
                    break;
                }
            }
            seen.insert(key(&cur), stack.len());
            stack.push(cur);

            let Some(next) = next_piece(&outgoing, &used, pieces, &prev, &cur) else {
                trace!(x = cur.x, y = cur.y, points = stack.len(), "open boundary chain dropped");
                break;
            };
            used[next] = true;
            prev = cur;
            cur = pieces[next].1;
        }
    }
    loops
}

fn next_piece(
    outgoing: &HashMap<Key, Vec<usize>>,
    used: &[bool],
    pieces: &[(Point64, Point64)],
    prev: &Point64,
    cur: &Point64,
) -> Option<usize> {
    let back = direction(cur, prev);
    outgoing
        .get(&key(cur))?
        .iter()
        .copied()
        .filter(|&i| !used[i])
        .max_by(|&a, &b| {
            let da = direction(cur, &pieces[a].1);
            let db = direction(cur, &pieces[b].1);
            ccw_angle_order(back, da, db)
        })
}

fn direction(from: &Point64, to: &Point64) -> (i128, i128) {
    (
        i128::from(to.x) - i128::from(from.x),
        i128::from(to.y) - i128::from(from.y),
    )
}

fn cross(a: (i128, i128), b: (i128, i128)) -> i128 {
    a.0 * b.1 - a.1 * b.0
}

/// Compares the counter-clockwise angles of `a` and `b` measured from
/// `reference`, in `[0, 360)`.
fn ccw_angle_order(reference: (i128, i128), a: (i128, i128), b: (i128, i128)) -> Ordering {
    let half = |v: (i128, i128)| {
        let c = cross(reference, v);
        let dot = reference.0 * v.0 + reference.1 * v.1;
        u8::from(!(c > 0 || (c == 0 && dot > 0)))
    };
    half(a).cmp(&half(b)).then_with(|| 0.cmp(&cross(a, b)))
}

/// Drops vertices where the path doubles back on itself along a line.
fn remove_spikes(path: Path64) -> Path64 {
    let is_spike = |a: &Point64, b: &Point64, c: &Point64| {
        if a == b || b == c {
            return true;
        }
        if cross_product(a, b, c) != 0 {
            return false;
        }
        let (ab, bc) = (direction(a, b), direction(b, c));
        ab.0 * bc.0 + ab.1 * bc.1 < 0
    };
    let mut out: Path64 = Vec::with_capacity(path.len());
    for pt in path {
        out.push(pt);
        while out.len() >= 3 {
            let n = out.len();
            if !is_spike(&out[n - 3], &out[n - 2], &out[n - 1]) {
                break;
            }
            out.remove(n - 2);
        }
    }
    while out.len() >= 3 {
        let n = out.len();
        if is_spike(&out[n - 2], &out[n - 1], &out[0]) {
            out.pop();
        } else if is_spike(&out[n - 1], &out[0], &out[1]) {
            out.remove(0);
        } else {
            break;
        }
    }
    out
}

/// Orders loops as outers, each followed by its holes. A hole belongs to
/// the smallest outer containing it; holes without one go last.
fn nest(loops: Paths64) -> Paths64 {
    let mut outers: Vec<(Path64, f64, Option<Rect64>)> = Vec::new();
    let mut holes: Vec<Path64> = Vec::new();
    for path in loops.into_iter().map(remove_spikes) {
        if path.len() < 3 {
            continue;
        }
        let a = area(&path);
        if a > 0.0 {
            let bounds = Rect64::bounds_of(&path);
            outers.push((path, a, bounds));
        } else if a < 0.0 {
            holes.push(path);
        }
    }

    let mut owned: Vec<Paths64> = vec![Vec::new(); outers.len()];
    let mut orphans = Vec::new();
    for hole in holes {
        let hole_bounds = Rect64::bounds_of(&hole);
        let owner = outers
            .iter()
            .enumerate()
            .filter(|(_, (outer, _, bounds))| {
                let fits = match (bounds, &hole_bounds) {
                    (Some(b), Some(h)) => {
                        b.left <= h.left && b.top <= h.top && b.right >= h.right && b.bottom >= h.bottom
                    }
                    _ => false,
                };
                fits && encloses(outer, &hole)
            })
            .min_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(i, _)| i);
        match owner {
            Some(i) => owned[i].push(hole),
            None => orphans.push(hole),
        }
    }

    let mut result = Vec::new();
    for ((outer, _, _), holes) in outers.into_iter().zip(owned) {
        result.push(outer);
        result.extend(holes);
    }
    result.extend(orphans);
    result
}

/// Decided by the first hole vertex not on the outer's boundary.
fn encloses(outer: &[Point64], hole: &[Point64]) -> bool {
    for pt in hole {
        match point_in_polygon(pt, outer) {
            PointInPolygon::Inside => return true,
            PointInPolygon::Outside => return false,
            PointInPolygon::On => {}
        }
    }
    true
}
