mod filter;
#[cfg(test)]
mod fixtures;
mod group;
mod options;
mod path_offset;
mod raw_offset;

pub use options::{DeltaCallback, EndType, JoinType, OffsetOptions};
pub use path_offset::{inflate_paths, inflate_paths_d, PathOffset};
