//! Clipping of paths against a single axis-aligned rectangle.
//!
//! Each subject path is walked once around the rectangle boundary, so the
//! general Boolean engine is never involved. Closed subjects are clipped
//! independently: the clipped pieces of an outer contour and of its holes
//! keep their input orientation, so their signed areas still add up to the
//! clipped region.

mod engine;
mod location;
mod out_pt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{Path64, PathD, Paths64, PathsD, Rect64, RectD};
use crate::math::scale::{precision_scale, scale_paths_to_float, scale_paths_to_int, scale_rect_to_int};

use engine::ClipEngine;

/// Intersects closed paths with a rectangle.
#[derive(Debug, Clone, Copy)]
pub struct RectClip {
    rect: Rect64,
}

impl RectClip {
    #[must_use]
    pub fn new(rect: Rect64) -> Self {
        Self { rect }
    }

    /// Clips every path in `paths`.
    ///
    /// Paths wholly inside the rectangle are returned unchanged, paths
    /// enclosing it yield its four corners, and paths with fewer than three
    /// points are skipped. An empty rectangle clips everything away.
    #[must_use]
    pub fn execute(&self, paths: &[Path64]) -> Paths64 {
        let mut result = Vec::new();
        if self.rect.is_empty() {
            debug!(rect = ?self.rect, "empty clip rectangle");
            return result;
        }
        let mut engine = ClipEngine::new(self.rect);
        for path in paths {
            if path.len() < 3 {
                continue;
            }
            let Some(bounds) = Rect64::bounds_of(path) else {
                continue;
            };
            if !self.rect.intersects(&bounds) {
                trace!(?bounds, "path outside clip rectangle");
                continue;
            }
            if self.rect.contains_rect(&bounds) {
                trace!(?bounds, "path inside clip rectangle");
                result.push(path.clone());
                continue;
            }
            result.extend(
                engine
                    .clip_polygon(path, bounds)
                    .into_iter()
                    .filter(|p| p.len() >= 3),
            );
        }
        debug!(subjects = paths.len(), result = result.len(), "rect clip executed");
        result
    }
}

/// Intersects open paths with a rectangle, splitting them where they leave
/// and re-enter it.
#[derive(Debug, Clone, Copy)]
pub struct RectClipLines {
    rect: Rect64,
}

impl RectClipLines {
    #[must_use]
    pub fn new(rect: Rect64) -> Self {
        Self { rect }
    }

    /// Clips every open path in `paths`. Paths with fewer than two points
    /// are skipped.
    #[must_use]
    pub fn execute(&self, paths: &[Path64]) -> Paths64 {
        let mut result = Vec::new();
        if self.rect.is_empty() {
            debug!(rect = ?self.rect, "empty clip rectangle");
            return result;
        }
        let mut engine = ClipEngine::new(self.rect);
        for path in paths {
            let Some(bounds) = Rect64::bounds_of(path) else {
                continue;
            };
            if !self.rect.intersects(&bounds) {
                continue;
            }
            result.extend(engine.clip_line(path).into_iter().filter(|p| p.len() >= 2));
        }
        debug!(subjects = paths.len(), result = result.len(), "rect clip of lines executed");
        result
    }
}

/// Intersects closed `paths` with `rect`.
#[must_use]
pub fn rect_clip(rect: &Rect64, paths: &[Path64]) -> Paths64 {
    RectClip::new(*rect).execute(paths)
}

/// Intersects open `paths` with `rect`.
#[must_use]
pub fn rect_clip_lines(rect: &Rect64, paths: &[Path64]) -> Paths64 {
    RectClipLines::new(*rect).execute(paths)
}

/// Float variant of [`rect_clip`], working at `10^precision` resolution.
///
/// # Errors
///
/// Returns [`crate::error::ScaleError`] variants when `precision` is outside
/// `[-8, 8]` or a coordinate is non-finite or too large once scaled.
pub fn rect_clip_d(rect: &RectD, paths: &[PathD], precision: i32) -> Result<PathsD> {
    let scale = precision_scale(precision)?;
    let rect = scale_rect_to_int(rect, scale)?;
    let int_paths = scale_paths_to_int(paths, scale)?;
    Ok(scale_paths_to_float(&rect_clip(&rect, &int_paths), scale))
}

/// Float variant of [`rect_clip_lines`].
///
/// # Errors
///
/// Same conditions as [`rect_clip_d`].
pub fn rect_clip_lines_d(rect: &RectD, paths: &[PathD], precision: i32) -> Result<PathsD> {
    let scale = precision_scale(precision)?;
    let rect = scale_rect_to_int(rect, scale)?;
    let int_paths = scale_paths_to_int(paths, scale)?;
    Ok(scale_paths_to_float(&rect_clip_lines(&rect, &int_paths), scale))
}
