use crate::geometry::{Path64, Paths64};

use super::fill_rule::FillRule;

/// Boolean self-union of a path set under a fill rule.
///
/// Implementations must return simple closed paths: every outer contour
/// positively oriented and directly followed by its holes, which are
/// negatively oriented. The call is total; malformed input yields fewer
/// paths, never a failure.
pub trait SimplifyUnion {
    /// Resolves overlaps and self-intersections of `paths`.
    fn simplify_union(&self, paths: &[Path64], fill_rule: FillRule) -> Paths64;
}

impl<T: SimplifyUnion + ?Sized> SimplifyUnion for &T {
    fn simplify_union(&self, paths: &[Path64], fill_rule: FillRule) -> Paths64 {
        (**self).simplify_union(paths, fill_rule)
    }
}

/// Computes the union of a set of closed paths under a fill rule.
pub struct Union<'a> {
    paths: &'a [Path64],
    fill_rule: FillRule,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(paths: &'a [Path64], fill_rule: FillRule) -> Self {
        Self { paths, fill_rule }
    }

    /// Executes the union with the given engine.
    #[must_use]
    pub fn execute(&self, engine: &dyn SimplifyUnion) -> Paths64 {
        engine.simplify_union(self.paths, self.fill_rule)
    }
}
