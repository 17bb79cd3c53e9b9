mod contour;
mod fill_rule;
mod overlay;
mod sweep;
mod union;

pub use fill_rule::FillRule;
pub use overlay::OverlayUnion;
pub use sweep::SweepUnion;
pub use union::{SimplifyUnion, Union};
