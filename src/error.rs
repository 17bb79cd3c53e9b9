use thiserror::Error;

/// Top-level error type for the polykernel crate.
///
/// The integer core (offsetting, rectangle clipping) never fails; errors only
/// arise at the floating-point boundary where user coordinates are scaled into
/// the fixed integer domain.
#[derive(Debug, Error)]
pub enum PolyError {
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

/// Errors raised while converting between floating and fixed coordinates.
#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("precision {precision} is out of range [{min}, {max}]")]
    PrecisionOutOfRange { precision: i32, min: i32, max: i32 },

    #[error("coordinate {value} exceeds the fixed-point range when scaled by {scale}")]
    CoordinateOutOfRange { value: f64, scale: f64 },

    #[error("non-finite coordinate: {value}")]
    NonFinite { value: f64 },
}

/// Convenience type alias for results using [`PolyError`].
pub type Result<T> = std::result::Result<T, PolyError>;
