//! Polyline approximation of circular arcs for round joins and caps.
//!
//! The number of segments per full turn is derived from the allowed
//! chord-to-arc deviation (`arc_tolerance`): a chord of a circle with radius
//! `r` spanning angle `a` deviates by `r * (1 - cos(a / 2))`.
use std::f64::consts::PI;

use super::{round_point, Point64, FLOAT_TOLERANCE};

/// Fewest segments used to approximate a full circle.
pub const MIN_ARC_STEPS: f64 = 4.0;

/// Most segments used to approximate a full circle.
pub const MAX_ARC_STEPS: f64 = 4096.0;

/// Deviation used when no arc tolerance is configured, as a fraction of the
/// offset distance.
const DEFAULT_ARC_FRACTION: f64 = 0.002;

/// Precomputed rotation step for arcs of one offset distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSteps {
    steps_per_rad: f64,
    step_sin: f64,
    step_cos: f64,
}

impl ArcSteps {
    /// Computes the step for offset distance `delta` (whose sign sets the
    /// rotation direction) and the configured `arc_tolerance` (`<= 0` selects
    /// a default proportional to `delta`).
    ///
    /// The step count per revolution is clamped to
    /// [`MIN_ARC_STEPS`]`..=`[`MAX_ARC_STEPS`].
    #[must_use]
    pub fn new(delta: f64, arc_tolerance: f64) -> Self {
        let abs_delta = delta.abs();
        let steps_per_360 = if abs_delta < FLOAT_TOLERANCE {
            MIN_ARC_STEPS
        } else {
            let arc_tol = if arc_tolerance > FLOAT_TOLERANCE {
                abs_delta.min(arc_tolerance)
            } else {
                abs_delta * DEFAULT_ARC_FRACTION
            };
            let wanted = (PI / (1.0 - arc_tol / abs_delta).acos()).min(abs_delta * PI);
            if wanted > MAX_ARC_STEPS {
                tracing::trace!(wanted, limit = MAX_ARC_STEPS, "clamping round join step count");
            }
            wanted.clamp(MIN_ARC_STEPS, MAX_ARC_STEPS)
        };
        let step_angle = 2.0 * PI / steps_per_360;
        let step_sin = if delta < 0.0 {
            -step_angle.sin()
        } else {
            step_angle.sin()
        };
        Self {
            steps_per_rad: steps_per_360 / (2.0 * PI),
            step_sin,
            step_cos: step_angle.cos(),
        }
    }

    /// Number of segments used to sweep `angle` radians.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps_for(&self, angle: f64) -> usize {
        (self.steps_per_rad * angle.abs()).ceil() as usize
    }

    /// Sine of the rotation per step (negative for negative offsets).
    #[must_use]
    pub fn step_sin(&self) -> f64 {
        self.step_sin
    }

    /// Cosine of the rotation per step.
    #[must_use]
    pub fn step_cos(&self) -> f64 {
        self.step_cos
    }
}

/// Approximates an axis-aligned ellipse with `steps` vertices, starting at
/// `(center.x + rx, center.y)` and turning counter-clockwise.
///
/// `ry <= 0` means a circle; `steps <= 2` derives a count from the radii.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ellipse(center: &Point64, rx: f64, ry: f64, steps: usize) -> Vec<Point64> {
    if rx <= 0.0 {
        return Vec::new();
    }
    let ry = if ry <= 0.0 { rx } else { ry };
    let steps = if steps <= 2 {
        ((PI * ((rx + ry) / 2.0).sqrt()) as usize).max(3)
    } else {
        steps
    };
    let step = 2.0 * PI / steps as f64;
    let (si, co) = step.sin_cos();
    let (cx, cy) = (center.x as f64, center.y as f64);
    let (mut dx, mut dy) = (co, si);
    let mut result = Vec::with_capacity(steps);
    result.push(round_point(cx + rx, cy));
    for _ in 1..steps {
        result.push(round_point(cx + rx * dx, cy + ry * dy));
        let x = dx * co - dy * si;
        dy = dy * co + dx * si;
        dx = x;
    }
    result
}
