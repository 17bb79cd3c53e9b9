use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use tracing::trace;

use crate::geometry::{Path64, Paths64};
use crate::math::polygon_2d::{area, strip_duplicates};
use crate::math::round_point;

use super::fill_rule::FillRule;
use super::union::SimplifyUnion;

/// [`SimplifyUnion`] backed by the `i_overlay` float overlay.
///
/// Contours are handed to the overlay as `f64` pairs and rounded back to the
/// integer grid; orientation is normalised so outer contours are positive
/// and holes negative.
///
/// The overlay snaps its input to an internal grid sized from the input
/// bounds, so results are only exact for small coordinate ranges. Use
/// [`SweepUnion`](super::SweepUnion) where coordinates must survive
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayUnion;

impl OverlayUnion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SimplifyUnion for OverlayUnion {
    #[allow(clippy::cast_precision_loss)]
    fn simplify_union(&self, paths: &[Path64], fill_rule: FillRule) -> Paths64 {
        let subject: Vec<Vec<[f64; 2]>> = paths
            .iter()
            .filter(|p| p.len() >= 3)
            .map(|p| p.iter().map(|pt| [pt.x as f64, pt.y as f64]).collect())
            .collect();
        if subject.is_empty() {
            return Vec::new();
        }
        let clip: Vec<Vec<[f64; 2]>> = Vec::new();
        let shapes = subject.overlay(&clip, OverlayRule::Union, fill_rule.into());

        let mut result = Vec::new();
        for shape in shapes {
            for (i, contour) in shape.into_iter().enumerate() {
                let raw: Path64 = contour.iter().map(|c| round_point(c[0], c[1])).collect();
                let mut path = strip_duplicates(&raw, true);
                let a = area(&path);
                if path.len() < 3 || a == 0.0 {
                    continue;
                }
                let is_outer = i == 0;
                if (a > 0.0) != is_outer {
                    path.reverse();
                }
                result.push(path);
            }
        }
        trace!(input = paths.len(), output = result.len(), "overlay union");
        result
    }
}
