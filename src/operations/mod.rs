pub mod boolean;
pub mod offset;
pub mod rect_clip;
