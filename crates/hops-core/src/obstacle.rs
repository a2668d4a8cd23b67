use std::fmt;

use crate::geom::{Point, Range};

/// An axis-aligned obstacle with inclusive bounds on both axes.
///
/// `left..=right` spans columns and `upper..=lower` spans rows. A single
/// blocked cell at (x, y) is `ObstacleRect::new(x, x, y, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleRect {
    pub left: i32,
    pub right: i32,
    pub upper: i32,
    pub lower: i32,
}

impl ObstacleRect {
    /// Create a rectangle from its inclusive bounds, in input order.
    #[inline]
    pub const fn new(left: i32, right: i32, upper: i32, lower: i32) -> Self {
        Self {
            left,
            right,
            upper,
            lower,
        }
    }

    /// A rectangle covering exactly one cell.
    #[inline]
    pub const fn cell(p: Point) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    /// Whether `left <= right` and `upper <= lower`.
    #[inline]
    pub fn is_well_formed(self) -> bool {
        self.left <= self.right && self.upper <= self.lower
    }

    /// Whether every covered cell lies inside `bounds`.
    ///
    /// Compares the inclusive edges directly, so rectangles reaching the
    /// limits of `i32` are rejected rather than wrapped.
    #[inline]
    pub fn fits(self, bounds: Range) -> bool {
        self.is_well_formed()
            && self.left >= bounds.min.x
            && self.right < bounds.max.x
            && self.upper >= bounds.min.y
            && self.lower < bounds.max.y
    }

    /// The same cells as a half-open [`Range`].
    ///
    /// `None` for an inverted rectangle, or when an inclusive far edge is
    /// `i32::MAX` and has no exclusive counterpart.
    #[inline]
    pub fn to_range(self) -> Option<Range> {
        if !self.is_well_formed() {
            return None;
        }
        Some(Range {
            min: Point::new(self.left, self.upper),
            max: Point::new(self.right.checked_add(1)?, self.lower.checked_add(1)?),
        })
    }
}

impl fmt::Display for ObstacleRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x {}..={}, y {}..={}",
            self.left, self.right, self.upper, self.lower
        )
    }
}
