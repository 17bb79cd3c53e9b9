use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Path64, PathD, Paths64, PathsD};
use crate::math::Point64;
use crate::math::scale::{precision_scale, scale_paths_to_float, scale_paths_to_int};
use crate::operations::boolean::{FillRule, SimplifyUnion, SweepUnion, Union};

use super::group::OffsetGroup;
use super::options::{DeltaCallback, EndType, JoinType, OffsetOptions};
use super::{filter, raw_offset};

/// Offsets closed polygons and open paths by a signed distance.
///
/// Paths are added in groups sharing a join and end type; [`execute`]
/// may be called repeatedly with different deltas against the same
/// groups. Positive deltas grow positively oriented polygons and shrink
/// holes; a group whose outermost path is negatively oriented is offset
/// the same way, so reversing the input does not change the outward side.
///
/// Results are simple paths whose holes are oriented opposite to their
/// outer contours. The orientation follows the first closed group (negative
/// when that group was given negatively oriented), inverted by
/// `reverse_solution`.
///
/// [`execute`]: PathOffset::execute
#[derive(Default)]
pub struct PathOffset {
    groups: Vec<OffsetGroup>,
    options: OffsetOptions,
    delta_callback: Option<DeltaCallback>,
}

impl fmt::Debug for PathOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOffset")
            .field("groups", &self.groups.len())
            .field("options", &self.options)
            .field("delta_callback", &self.delta_callback.is_some())
            .finish()
    }
}

impl PathOffset {
    /// Creates an empty job with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty job with the given options.
    #[must_use]
    pub fn with_options(options: OffsetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &OffsetOptions {
        &self.options
    }

    pub fn set_miter_limit(&mut self, miter_limit: f64) {
        self.options.miter_limit = miter_limit;
    }

    pub fn set_arc_tolerance(&mut self, arc_tolerance: f64) {
        self.options.arc_tolerance = arc_tolerance;
    }

    pub fn set_preserve_collinear(&mut self, preserve_collinear: bool) {
        self.options.preserve_collinear = preserve_collinear;
    }

    pub fn set_reverse_solution(&mut self, reverse_solution: bool) {
        self.options.reverse_solution = reverse_solution;
    }

    /// Supplies the offset distance per vertex instead of a constant delta.
    ///
    /// The callback's value replaces `delta` in [`execute`](Self::execute)
    /// (the sign of `delta` then only matters for the near-zero check).
    pub fn set_delta_callback(&mut self, callback: DeltaCallback) {
        self.delta_callback = Some(callback);
    }

    pub fn clear_delta_callback(&mut self) {
        self.delta_callback = None;
    }

    /// Adds one path as its own group.
    pub fn add_path(&mut self, path: &[Point64], join_type: JoinType, end_type: EndType) {
        self.add_paths(&[path.to_vec()], join_type, end_type);
    }

    /// Adds a group of paths sharing `join_type` and `end_type`.
    pub fn add_paths(&mut self, paths: &[Path64], join_type: JoinType, end_type: EndType) {
        if paths.is_empty() {
            return;
        }
        self.groups.push(OffsetGroup::new(paths, join_type, end_type));
    }

    /// Removes every added path.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Offsets all groups by `delta`, cleaning the result with
    /// [`SweepUnion`].
    #[must_use]
    pub fn execute(&self, delta: f64) -> Paths64 {
        self.execute_with(delta, &SweepUnion)
    }

    /// Offsets all groups by `delta`, cleaning the result with `engine`.
    ///
    /// Candidates are unioned under [`FillRule::Positive`]: regions the raw
    /// offset turned inside out wind negatively and vanish, along with the
    /// loops that fold back over them.
    ///
    /// Never fails: without groups, or with a non-finite delta, the result
    /// is empty.
    #[must_use]
    pub fn execute_with(&self, delta: f64, engine: &dyn SimplifyUnion) -> Paths64 {
        if self.groups.is_empty() {
            return Vec::new();
        }
        if !delta.is_finite() {
            debug!(delta, "non-finite offset delta, nothing to do");
            return Vec::new();
        }

        let candidates = self.candidates(delta);
        let unioned = Union::new(&candidates, FillRule::Positive).execute(engine);
        let mut result = filter::apply(&unioned, self.options.preserve_collinear);

        if self.first_polygon_reversed() != self.options.reverse_solution {
            for path in &mut result {
                path.reverse();
            }
        }
        debug!(
            groups = self.groups.len(),
            candidates = candidates.len(),
            unioned = unioned.len(),
            result = result.len(),
            delta,
            "offset executed"
        );
        result
    }

    /// Raw offset paths before cleanup, oriented so every region meant to
    /// be filled winds positively.
    #[must_use]
    pub fn candidates(&self, delta: f64) -> Paths64 {
        let mut out = Vec::new();
        for group in &self.groups {
            let start = out.len();
            raw_offset::build(group, delta, &self.options, self.delta_callback.as_ref(), &mut out);
            if group.is_reversed {
                for path in &mut out[start..] {
                    path.reverse();
                }
            }
        }
        out
    }

    fn first_polygon_reversed(&self) -> bool {
        self.groups
            .iter()
            .find(|g| g.end_type == EndType::Polygon)
            .is_some_and(|g| g.is_reversed)
    }
}

/// Offsets `paths` by `delta` in one call.
#[must_use]
pub fn inflate_paths(
    paths: &[Path64],
    delta: f64,
    join_type: JoinType,
    end_type: EndType,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Paths64 {
    let options = OffsetOptions::default()
        .with_miter_limit(miter_limit)
        .with_arc_tolerance(arc_tolerance);
    let mut job = PathOffset::with_options(options);
    job.add_paths(paths, join_type, end_type);
    job.execute(delta)
}

/// Offsets floating-point `paths`, working at `10^precision` resolution.
///
/// `delta` and `arc_tolerance` are in the same units as the coordinates.
///
/// # Errors
///
/// Returns [`crate::error::ScaleError`] variants when `precision` is outside
/// `[-8, 8]` or a coordinate is non-finite or too large once scaled.
pub fn inflate_paths_d(
    paths: &[PathD],
    delta: f64,
    join_type: JoinType,
    end_type: EndType,
    miter_limit: f64,
    precision: i32,
    arc_tolerance: f64,
) -> Result<PathsD> {
    let scale = precision_scale(precision)?;
    let int_paths = scale_paths_to_int(paths, scale)?;
    let result = inflate_paths(
        &int_paths,
        delta * scale,
        join_type,
        end_type,
        miter_limit,
        arc_tolerance * scale,
    );
    Ok(scale_paths_to_float(&result, scale))
}
