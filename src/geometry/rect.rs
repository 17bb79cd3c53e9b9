use crate::math::Point64;

/// Axis-aligned integer rectangle. `top <= bottom` in coordinate value, so
/// "top" is the smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect64 {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect64 {
    /// Creates a rectangle from its four sides.
    #[must_use]
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Returns `true` for rectangles without interior (zero width or
    /// height, or inverted sides).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bottom <= self.top || self.right <= self.left
    }

    #[must_use]
    pub fn mid_point(&self) -> Point64 {
        Point64::new(
            self.left + (self.right - self.left) / 2,
            self.top + (self.bottom - self.top) / 2,
        )
    }

    /// The four corners: left-top, right-top, right-bottom, left-bottom.
    #[must_use]
    pub fn as_path(&self) -> Vec<Point64> {
        vec![
            Point64::new(self.left, self.top),
            Point64::new(self.right, self.top),
            Point64::new(self.right, self.bottom),
            Point64::new(self.left, self.bottom),
        ]
    }

    /// Returns `true` when `pt` lies strictly inside the rectangle.
    #[must_use]
    pub fn contains_point(&self, pt: &Point64) -> bool {
        pt.x > self.left && pt.x < self.right && pt.y > self.top && pt.y < self.bottom
    }

    /// Returns `true` when `other` lies inside this rectangle (sides may
    /// coincide).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect64) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Returns `true` when the rectangles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Rect64) -> bool {
        self.left.max(other.left) <= self.right.min(other.right)
            && self.top.max(other.top) <= self.bottom.min(other.bottom)
    }

    /// Bounding rectangle of a single path, or `None` when it is empty.
    #[must_use]
    pub fn bounds_of(path: &[Point64]) -> Option<Self> {
        let first = path.first()?;
        let mut rect = Self::new(first.x, first.y, first.x, first.y);
        for pt in &path[1..] {
            rect.left = rect.left.min(pt.x);
            rect.right = rect.right.max(pt.x);
            rect.top = rect.top.min(pt.y);
            rect.bottom = rect.bottom.max(pt.y);
        }
        Some(rect)
    }

    /// Bounding rectangle of all points of all paths, or `None` when there
    /// are no points.
    #[must_use]
    pub fn bounds(paths: &[Vec<Point64>]) -> Option<Self> {
        paths
            .iter()
            .filter_map(|p| Self::bounds_of(p))
            .reduce(|a, b| {
                Self::new(
                    a.left.min(b.left),
                    a.top.min(b.top),
                    a.right.max(b.right),
                    a.bottom.max(b.bottom),
                )
            })
    }
}

/// Floating-point rectangle accepted by the float entry points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectD {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectD {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}
