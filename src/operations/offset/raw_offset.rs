use std::f64::consts::PI;

use crate::geometry::{Path64, Paths64, Rect64};
use crate::math::arc_2d::{ellipse, ArcSteps};
use crate::math::intersect_2d::{line_line_intersect_2d, reflect_point};
use crate::math::polygon_2d::reverse_path;
use crate::math::{round_point, to_point_d, Point64, PointD, VectorD, FLOAT_TOLERANCE};

use super::group::OffsetGroup;
use super::{DeltaCallback, EndType, JoinType, OffsetOptions};

/// Below this `|delta|` (and without a delta callback) paths are copied
/// through unchanged.
const MIN_OFFSET: f64 = 0.5;

/// Turns flatter than this cosine are always mitered (except round joins).
const NEAR_STRAIGHT_COS: f64 = 0.999;

/// Turns at least this close to a full reversal are never treated as
/// concave.
const REVERSAL_COS: f64 = -0.999;

/// Concave turns sharper than this cosine also route through the vertex.
const CONCAVE_VERTEX_COS: f64 = 0.99;

/// Builds the raw (possibly self-intersecting) offset of every path in
/// `group`, appending the candidate paths to `out`.
///
/// Candidates keep the orientation the offset produces; for reversed groups
/// that is negative.
pub(super) fn build(
    group: &OffsetGroup,
    delta: f64,
    options: &OffsetOptions,
    callback: Option<&DeltaCallback>,
    out: &mut Paths64,
) {
    if callback.is_none() && delta.abs() < MIN_OFFSET {
        out.extend(group.paths.iter().filter(|p| !p.is_empty()).cloned());
        return;
    }

    let group_delta = match group.end_type {
        EndType::Polygon => {
            let delta = if group.lowest.is_none() { delta.abs() } else { delta };
            if group.is_reversed {
                -delta
            } else {
                delta
            }
        }
        _ => delta.abs(),
    };

    let mut builder = GroupBuilder {
        group,
        callback,
        end_type: group.end_type,
        delta: group_delta,
        temp_lim: if options.miter_limit <= 1.0 {
            2.0
        } else {
            2.0 / (options.miter_limit * options.miter_limit)
        },
        arc_tolerance: options.arc_tolerance,
        arc: ArcSteps::new(group_delta, options.arc_tolerance),
        norms: Vec::new(),
        path_out: Vec::new(),
    };

    for path in &group.paths {
        builder.delta = group_delta;
        builder.offset_path(path, out);
    }
}

/// Per-group offset state; `delta` varies per vertex when a callback is set.
struct GroupBuilder<'a> {
    group: &'a OffsetGroup,
    callback: Option<&'a DeltaCallback>,
    end_type: EndType,
    delta: f64,
    temp_lim: f64,
    arc_tolerance: f64,
    arc: ArcSteps,
    norms: Vec<VectorD>,
    path_out: Path64,
}

impl GroupBuilder<'_> {
    fn offset_path(&mut self, path: &[Point64], out: &mut Paths64) {
        match path.len() {
            0 => return,
            1 => {
                if let Some(single) = self.offset_single_point(path) {
                    out.push(single);
                }
                return;
            }
            _ => {}
        }

        self.end_type = if path.len() == 2 && self.group.end_type == EndType::Joined {
            if self.group.join_type == JoinType::Round {
                EndType::Round
            } else {
                EndType::Square
            }
        } else {
            self.group.end_type
        };

        self.build_normals(path);
        match self.end_type {
            EndType::Polygon => self.offset_polygon(path, out),
            EndType::Joined => self.offset_open_joined(path, out),
            _ => self.offset_open_path(path, out),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn offset_single_point(&mut self, path: &[Point64]) -> Option<Path64> {
        if let Some(cb) = self.callback {
            let d = cb(path, &[], 0, 0);
            self.delta = if self.group.is_reversed { -d } else { d };
        }
        let abs_delta = self.delta.abs();
        if abs_delta < 1.0 {
            return None;
        }
        let pt = path[0];
        if self.group.join_type == JoinType::Round {
            let steps = ArcSteps::new(abs_delta, self.arc_tolerance).steps_for(2.0 * PI);
            Some(ellipse(&pt, abs_delta, abs_delta, steps))
        } else {
            let d = abs_delta.ceil() as i64;
            Some(Rect64::new(pt.x - d, pt.y - d, pt.x + d, pt.y + d).as_path())
        }
    }

    fn build_normals(&mut self, path: &[Point64]) {
        let n = path.len();
        self.norms.clear();
        self.norms.reserve(n);
        for i in 0..n {
            self.norms.push(unit_normal(&path[i], &path[(i + 1) % n]));
        }
    }

    fn offset_polygon(&mut self, path: &[Point64], out: &mut Paths64) {
        self.path_out.clear();
        let mut k = path.len() - 1;
        for j in 0..path.len() {
            self.offset_point(path, j, k);
            k = j;
        }
        self.flush(out);
    }

    fn offset_open_joined(&mut self, path: &[Point64], out: &mut Paths64) {
        self.offset_polygon(path, out);
        let reversed = reverse_path(path);
        self.norms.reverse();
        self.norms.rotate_left(1);
        for norm in &mut self.norms {
            *norm = -*norm;
        }
        self.offset_polygon(&reversed, out);
    }

    fn offset_open_path(&mut self, path: &[Point64], out: &mut Paths64) {
        self.path_out.clear();
        let high = path.len() - 1;

        if let Some(cb) = self.callback {
            self.delta = cb(path, &self.norms, 0, 0);
        }
        self.add_cap(path, 0);

        for j in 1..high {
            self.offset_point(path, j, j - 1);
        }

        for i in (1..=high).rev() {
            self.norms[i] = -self.norms[i - 1];
        }
        self.norms[0] = self.norms[high];

        if let Some(cb) = self.callback {
            self.delta = cb(path, &self.norms, high, high);
        }
        self.add_cap(path, high);

        for j in (1..high).rev() {
            self.offset_point(path, j, j + 1);
        }
        self.flush(out);
    }

    fn add_cap(&mut self, path: &[Point64], i: usize) {
        if self.delta.abs() <= FLOAT_TOLERANCE {
            self.path_out.push(path[i]);
            return;
        }
        match self.end_type {
            EndType::Butt => self.do_bevel(path, i, i),
            EndType::Round => self.do_round(path, i, i, PI),
            _ => self.do_square(path, i, i),
        }
    }

    fn flush(&mut self, out: &mut Paths64) {
        if !self.path_out.is_empty() {
            out.push(std::mem::take(&mut self.path_out));
        }
    }

    /// Emits the offset geometry at vertex `j`, whose incoming edge starts
    /// at vertex `k`.
    fn offset_point(&mut self, path: &[Point64], j: usize, k: usize) {
        if path[j] == path[k] {
            return;
        }
        let nj = self.norms[j];
        let nk = self.norms[k];
        let sin_a = (nj.y * nk.x - nk.y * nj.x).clamp(-1.0, 1.0);
        let cos_a = nj.dot(&nk);

        if let Some(cb) = self.callback {
            let d = cb(path, &self.norms, j, k);
            self.delta = if self.group.is_reversed { -d } else { d };
        }
        if self.delta.abs() <= FLOAT_TOLERANCE {
            self.path_out.push(path[j]);
            return;
        }

        if cos_a > REVERSAL_COS && sin_a * self.delta < 0.0 {
            // Concave: the overlap is resolved by the union pass.
            self.path_out.push(self.perpendicular(&path[j], &nk));
            if cos_a < CONCAVE_VERTEX_COS {
                self.path_out.push(path[j]);
            }
            self.path_out.push(self.perpendicular(&path[j], &nj));
        } else if cos_a > NEAR_STRAIGHT_COS && self.group.join_type != JoinType::Round {
            self.do_miter(path, j, k, cos_a);
        } else {
            match self.group.join_type {
                JoinType::Miter => {
                    if cos_a > self.temp_lim - 1.0 {
                        self.do_miter(path, j, k, cos_a);
                    } else {
                        self.do_square(path, j, k);
                    }
                }
                JoinType::Round => self.do_round(path, j, k, sin_a.atan2(cos_a)),
                JoinType::Bevel => self.do_bevel(path, j, k),
                JoinType::Square => self.do_square(path, j, k),
            }
        }
    }

    fn perpendicular(&self, pt: &Point64, norm: &VectorD) -> Point64 {
        let p = self.perpendicular_d(pt, norm);
        round_point(p.x, p.y)
    }

    fn perpendicular_d(&self, pt: &Point64, norm: &VectorD) -> PointD {
        to_point_d(pt) + norm * self.delta
    }

    fn push_d(&mut self, pt: &PointD) {
        self.path_out.push(round_point(pt.x, pt.y));
    }

    fn do_miter(&mut self, path: &[Point64], j: usize, k: usize, cos_a: f64) {
        let q = self.delta / (cos_a + 1.0);
        let pt = to_point_d(&path[j]) + (self.norms[k] + self.norms[j]) * q;
        self.push_d(&pt);
    }

    fn do_bevel(&mut self, path: &[Point64], j: usize, k: usize) {
        let pj = to_point_d(&path[j]);
        let (pt1, pt2) = if j == k {
            let offset = self.norms[j] * self.delta.abs();
            (pj - offset, pj + offset)
        } else {
            (pj + self.norms[k] * self.delta, pj + self.norms[j] * self.delta)
        };
        self.push_d(&pt1);
        self.push_d(&pt2);
    }

    fn do_square(&mut self, path: &[Point64], j: usize, k: usize) {
        let nj = self.norms[j];
        let nk = self.norms[k];
        let vec = if j == k {
            VectorD::new(nj.y, -nj.x)
        } else {
            average_unit_vector(&VectorD::new(-nk.y, nk.x), &VectorD::new(nj.y, -nj.x))
        };
        let d = self.delta;

        // Square the corner off at |delta| beyond the vertex.
        let pt_q = to_point_d(&path[j]) + vec * d.abs();
        let pt1 = PointD::new(pt_q.x + d * vec.y, pt_q.y - d * vec.x);
        let pt2 = PointD::new(pt_q.x - d * vec.y, pt_q.y + d * vec.x);
        let pt3 = self.perpendicular_d(&path[k], &nk);

        if j == k {
            let pt4 = pt3 + vec * d;
            let pt = line_line_intersect_2d(&pt1, &pt2, &pt3, &pt4).unwrap_or(pt_q);
            self.push_d(&reflect_point(&pt, &pt_q));
            self.push_d(&pt);
        } else {
            let pt4 = self.perpendicular_d(&path[j], &nk);
            let pt = line_line_intersect_2d(&pt1, &pt2, &pt3, &pt4).unwrap_or(pt_q);
            self.push_d(&pt);
            self.push_d(&reflect_point(&pt, &pt_q));
        }
    }

    fn do_round(&mut self, path: &[Point64], j: usize, k: usize, angle: f64) {
        let arc = if self.callback.is_some() {
            ArcSteps::new(self.delta, self.arc_tolerance)
        } else {
            self.arc
        };
        let pt = to_point_d(&path[j]);
        let mut offset = self.norms[k] * self.delta;
        if j == k {
            offset = -offset;
        }
        self.push_d(&(pt + offset));

        let (step_sin, step_cos) = (arc.step_sin(), arc.step_cos());
        for _ in 1..arc.steps_for(angle) {
            offset = VectorD::new(
                offset.x * step_cos - step_sin * offset.y,
                offset.x * step_sin + offset.y * step_cos,
            );
            self.push_d(&(pt + offset));
        }
        let end = self.perpendicular(&path[j], &self.norms[j]);
        self.path_out.push(end);
    }
}

/// Right-hand unit normal of the edge `a -> b`; zero for coincident points.
#[allow(clippy::cast_precision_loss)]
fn unit_normal(a: &Point64, b: &Point64) -> VectorD {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    if dx == 0.0 && dy == 0.0 {
        return VectorD::zeros();
    }
    let inv = 1.0 / dx.hypot(dy);
    VectorD::new(dy * inv, -dx * inv)
}

fn average_unit_vector(a: &VectorD, b: &VectorD) -> VectorD {
    let sum = a + b;
    let len = sum.norm();
    if len < FLOAT_TOLERANCE {
        VectorD::zeros()
    } else {
        sum / len
    }
}
