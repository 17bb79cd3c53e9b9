use crate::math::{Point64, VectorD};

/// Geometry inserted at a vertex where two offset edges meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// Corner cut square at `|delta|` beyond the vertex.
    Square,
    /// Circular arc approximated within the arc tolerance.
    Round,
    /// Edges extended to their intersection, falling back to `Square` past
    /// the miter limit.
    Miter,
    /// Straight chord between the two offset edges.
    Bevel,
}

/// Treatment of path ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndType {
    /// Closed polygon.
    Polygon,
    /// Open path offset on both sides as a closed loop (no caps).
    Joined,
    /// Open path, flat cap at each end.
    Butt,
    /// Open path, square cap extending `delta` past each end.
    Square,
    /// Open path, semicircular cap at each end.
    Round,
}

impl EndType {
    /// Returns `true` for end types that treat the path as closed.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Polygon | Self::Joined)
    }
}

/// Per-vertex delta supplier: receives the path, its unit edge normals, the
/// current vertex index and the previous vertex index.
pub type DeltaCallback = Box<dyn Fn(&[Point64], &[VectorD], usize, usize) -> f64>;

/// Numeric and policy parameters of an offset job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOptions {
    /// Largest miter length as a multiple of `delta`; values `<= 1` square
    /// off every join that is not nearly straight.
    pub miter_limit: f64,
    /// Largest chord-to-arc deviation for round joins and caps; `<= 0`
    /// derives one from `delta`.
    pub arc_tolerance: f64,
    /// Keep collinear vertices in the result.
    pub preserve_collinear: bool,
    /// Invert the orientation of every result path.
    pub reverse_solution: bool,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            miter_limit: 2.0,
            arc_tolerance: 0.0,
            preserve_collinear: false,
            reverse_solution: false,
        }
    }
}

impl OffsetOptions {
    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    #[must_use]
    pub fn with_arc_tolerance(mut self, arc_tolerance: f64) -> Self {
        self.arc_tolerance = arc_tolerance;
        self
    }

    #[must_use]
    pub fn with_preserve_collinear(mut self, preserve_collinear: bool) -> Self {
        self.preserve_collinear = preserve_collinear;
        self
    }

    #[must_use]
    pub fn with_reverse_solution(mut self, reverse_solution: bool) -> Self {
        self.reverse_solution = reverse_solution;
        self
    }
}
