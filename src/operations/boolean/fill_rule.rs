use i_overlay::core::fill_rule::FillRule as OverlayFillRule;

/// Rule deciding which regions of overlapping or self-intersecting paths
/// are filled, from the winding number `w` of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Filled when `w` is odd.
    EvenOdd,
    /// Filled when `w != 0`.
    #[default]
    NonZero,
    /// Filled when `w > 0`.
    Positive,
    /// Filled when `w < 0`.
    Negative,
}

impl FillRule {
    /// Returns `true` when a region with winding number `winding` is filled.
    #[must_use]
    pub fn is_filled(self, winding: i32) -> bool {
        match self {
            Self::EvenOdd => winding % 2 != 0,
            Self::NonZero => winding != 0,
            Self::Positive => winding > 0,
            Self::Negative => winding < 0,
        }
    }
}

// `i_overlay` counts winding with the opposite sign to the y-up convention
// used here, so the signed rules swap.
impl From<FillRule> for OverlayFillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::EvenOdd => Self::EvenOdd,
            FillRule::NonZero => Self::NonZero,
            FillRule::Positive => Self::Negative,
            FillRule::Negative => Self::Positive,
        }
    }
}
