use crate::geometry::{Path64, Paths64};
use crate::math::polygon_2d::{area, strip_duplicates};

use super::{EndType, JoinType};

/// Paths added together by one `add_paths` call, sharing join and end type.
#[derive(Debug, Clone)]
pub(super) struct OffsetGroup {
    pub paths: Paths64,
    pub join_type: JoinType,
    pub end_type: EndType,
    /// Index of the path holding the lowest vertex among closed paths with
    /// nonzero area.
    pub lowest: Option<usize>,
    /// The lowest path is negatively oriented, so the whole group is
    /// offset with the sign of delta flipped.
    pub is_reversed: bool,
}

impl OffsetGroup {
    pub fn new(paths: &[Path64], join_type: JoinType, end_type: EndType) -> Self {
        let is_closed = end_type.is_closed();
        let paths: Paths64 = paths
            .iter()
            .map(|p| strip_duplicates(p, is_closed))
            .collect();

        let (lowest, is_reversed) = if end_type == EndType::Polygon {
            match lowest_closed_path(&paths) {
                Some((idx, negative)) => (Some(idx), negative),
                None => (None, false),
            }
        } else {
            (None, false)
        };

        Self {
            paths,
            join_type,
            end_type,
            lowest,
            is_reversed,
        }
    }
}

/// Finds the path owning the lowest vertex (largest y, then smallest x)
/// among paths with nonzero area, and whether that path is negative.
fn lowest_closed_path(paths: &[Path64]) -> Option<(usize, bool)> {
    let mut best: Option<(usize, bool)> = None;
    let mut bottom = (i64::MIN, i64::MAX);
    for (i, path) in paths.iter().enumerate() {
        let mut path_area: Option<f64> = None;
        for pt in path {
            if pt.y < bottom.0 || (pt.y == bottom.0 && pt.x >= bottom.1) {
                continue;
            }
            let a = *path_area.get_or_insert_with(|| area(path));
            if a == 0.0 {
                break;
            }
            best = Some((i, a < 0.0));
            bottom = (pt.y, pt.x);
        }
    }
    best
}
