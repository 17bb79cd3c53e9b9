//! Conversion between user-facing floating-point coordinates and the fixed
//! integer domain the kernel works in.
//!
//! The scale factor is always an explicit argument; there is no global
//! precision state.
use crate::error::{Result, ScaleError};
use crate::geometry::{Path64, PathD, Paths64, PathsD, Rect64, RectD};

use super::{Point64, PointD, MAX_COORD};

/// Smallest accepted decimal precision.
pub const MIN_PRECISION: i32 = -8;

/// Largest accepted decimal precision.
pub const MAX_PRECISION: i32 = 8;

/// Returns `10^precision`, the factor applied to float coordinates.
///
/// # Errors
///
/// Returns [`ScaleError::PrecisionOutOfRange`] when `precision` lies outside
/// [`MIN_PRECISION`]`..=`[`MAX_PRECISION`].
pub fn precision_scale(precision: i32) -> Result<f64> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(ScaleError::PrecisionOutOfRange {
            precision,
            min: MIN_PRECISION,
            max: MAX_PRECISION,
        }
        .into());
    }
    Ok(10f64.powi(precision))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scale_coord(value: f64, scale: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(ScaleError::NonFinite { value }.into());
    }
    let scaled = (value * scale).round();
    if !scaled.is_finite() || scaled.abs() > MAX_COORD as f64 {
        return Err(ScaleError::CoordinateOutOfRange { value, scale }.into());
    }
    Ok(scaled as i64)
}

/// Scales and rounds a float path into the fixed integer domain.
///
/// # Errors
///
/// Returns [`ScaleError::NonFinite`] for NaN or infinite coordinates and
/// [`ScaleError::CoordinateOutOfRange`] when a scaled coordinate exceeds
/// [`MAX_COORD`].
pub fn scale_path_to_int(path: &[PointD], scale: f64) -> Result<Path64> {
    path.iter()
        .map(|pt| Ok(Point64::new(scale_coord(pt.x, scale)?, scale_coord(pt.y, scale)?)))
        .collect()
}

/// Scales every path with [`scale_path_to_int`].
///
/// # Errors
///
/// Propagates the first error of any path.
pub fn scale_paths_to_int(paths: &[PathD], scale: f64) -> Result<Paths64> {
    paths.iter().map(|p| scale_path_to_int(p, scale)).collect()
}

/// Scales and rounds a float rectangle into the fixed integer domain.
///
/// # Errors
///
/// Same conditions as [`scale_path_to_int`].
pub fn scale_rect_to_int(rect: &RectD, scale: f64) -> Result<Rect64> {
    Ok(Rect64::new(
        scale_coord(rect.left, scale)?,
        scale_coord(rect.top, scale)?,
        scale_coord(rect.right, scale)?,
        scale_coord(rect.bottom, scale)?,
    ))
}

/// Converts fixed integer paths back to floats by dividing by `scale`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale_paths_to_float(paths: &[Path64], scale: f64) -> PathsD {
    let inv = 1.0 / scale;
    paths
        .iter()
        .map(|path| {
            path.iter()
                .map(|pt| PointD::new(pt.x as f64 * inv, pt.y as f64 * inv))
                .collect()
        })
        .collect()
}
