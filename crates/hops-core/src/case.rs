use crate::error::{GeometryError, PointRole};
use crate::geom::{Point, Range};
use crate::grid::OccupancyGrid;
use crate::obstacle::ObstacleRect;

/// One hopper puzzle: a grid, its obstacles and the two endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestCase {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub finish: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<ObstacleRect>,
}

impl TestCase {
    /// A case on an obstacle-free grid.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Self {
        Self {
            width,
            height,
            start,
            finish,
            obstacles: Vec::new(),
        }
    }

    /// Add an obstacle rectangle.
    pub fn with_obstacle(mut self, rect: ObstacleRect) -> Self {
        self.obstacles.push(rect);
        self
    }

    /// The range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Materialize the occupancy grid, after checking that both endpoints lie
    /// on it.
    pub fn build_grid(&self) -> Result<OccupancyGrid, GeometryError> {
        let grid = OccupancyGrid::build(self.width, self.height, &self.obstacles)?;
        check_endpoint(PointRole::Start, self.start, grid.bounds())?;
        check_endpoint(PointRole::Finish, self.finish, grid.bounds())?;
        Ok(grid)
    }
}

/// Fail with [`GeometryError::PointOutOfBounds`] unless `bounds` contains `point`.
pub fn check_endpoint(role: PointRole, point: Point, bounds: Range) -> Result<(), GeometryError> {
    if bounds.contains(point) {
        Ok(())
    } else {
        Err(GeometryError::PointOutOfBounds {
            role,
            point,
            bounds,
        })
    }
}
