//! Integer-coordinate polygon offsetting and rectangle clipping.
//!
//! Geometry is held in a fixed integer domain ([`math::Point64`]); the `_d`
//! entry points accept floating-point coordinates together with an explicit
//! decimal precision and convert at the boundary.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolyError, Result, ScaleError};
pub use geometry::{Path64, PathD, Paths64, PathsD, Rect64, RectD};
pub use operations::boolean::{FillRule, OverlayUnion, SimplifyUnion, SweepUnion};
pub use operations::offset::{
    inflate_paths, inflate_paths_d, DeltaCallback, EndType, JoinType, OffsetOptions, PathOffset,
};
pub use operations::rect_clip::{
    rect_clip, rect_clip_d, rect_clip_lines, rect_clip_lines_d, RectClip, RectClipLines,
};
