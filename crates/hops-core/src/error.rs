//! Precondition failures raised when input geometry does not fit its grid.

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range};
use crate::obstacle::ObstacleRect;

/// Which endpoint of a search a [`GeometryError::PointOutOfBounds`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    Start,
    Finish,
}

impl fmt::Display for PointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
        }
    }
}

/// Invalid input geometry.
///
/// Returned by [`OccupancyGrid::build`](crate::OccupancyGrid::build) and by
/// the search engine before any work is done; a value of this type means the
/// caller handed over a test case that cannot be laid out on its grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Width or height is zero or negative.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// A start or finish point lies outside the grid.
    #[error("{role} point {point} lies outside grid bounds {bounds}")]
    PointOutOfBounds {
        role: PointRole,
        point: Point,
        bounds: Range,
    },

    /// An obstacle rectangle has `left > right` or `upper > lower`.
    /// `index` is zero-based; messages count from one.
    #[error("obstacle {} ({rect}) is inverted", .index + 1)]
    InvertedObstacle { index: usize, rect: ObstacleRect },

    /// An obstacle rectangle reaches outside the grid.
    #[error("obstacle {} ({rect}) reaches outside grid bounds {bounds}", .index + 1)]
    ObstacleOutOfBounds {
        index: usize,
        rect: ObstacleRect,
        bounds: Range,
    },
}
