//! The occupancy surface a hopper lands on.
//!
//! [`OccupancyGrid`] is built once per test case from its dimensions and
//! obstacle rectangles and is read-only afterwards. Cells are stored in
//! row-major order.

use std::fmt;

use crate::error::GeometryError;
use crate::geom::{Point, Range};
use crate::obstacle::ObstacleRect;

/// A fixed-size grid of blocked/free cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
    bounds: Range,
}

impl OccupancyGrid {
    /// Build a `width` x `height` grid with every cell covered by one of
    /// `obstacles` marked occupied.
    ///
    /// Overlapping rectangles simply occupy the union of their cells. The
    /// dimensions must be positive and every rectangle must be well formed
    /// and lie fully inside the grid; the first offending rectangle is
    /// reported by index.
    pub fn build(
        width: i32,
        height: i32,
        obstacles: &[ObstacleRect],
    ) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::InvalidDimensions { width, height });
        }
        let bounds = Range::with_size(width, height);

        for (index, &rect) in obstacles.iter().enumerate() {
            if !rect.is_well_formed() {
                return Err(GeometryError::InvertedObstacle { index, rect });
            }
            if !rect.fits(bounds) {
                return Err(GeometryError::ObstacleOutOfBounds {
                    index,
                    rect,
                    bounds,
                });
            }
        }

        let mut grid = Self {
            cells: vec![false; bounds.len()],
            bounds,
        };
        for p in obstacles.iter().filter_map(|r| r.to_range()).flatten() {
            let idx = grid.index(p);
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    /// A grid without any obstacles.
    pub fn empty(width: i32, height: i32) -> Result<Self, GeometryError> {
        Self::build(width, height, &[])
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        ((p.y - self.bounds.min.y) * self.bounds.width() + (p.x - self.bounds.min.x)) as usize
    }

    /// The range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Occupancy of the cell at `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn is_occupied(&self, p: Point) -> Option<bool> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether a hopper may land on `p`: on the grid and not occupied.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.is_occupied(p) == Some(false)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for OccupancyGrid {
    /// One line per row, `#` for occupied cells and `.` for free ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.width() as usize).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for &occupied in chunk {
                f.write_str(if occupied { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid() {
        let g = OccupancyGrid::empty(4, 3).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.is_occupied(Point::new(3, 2)), Some(false));
        assert_eq!(g.is_occupied(Point::new(4, 0)), None);
        assert!(!g.is_free(Point::new(0, -1)));
    }

    #[test]
    fn marks_inclusive_rectangle() {
        let g = OccupancyGrid::build(5, 5, &[ObstacleRect::new(1, 2, 1, 3)]).unwrap();
        assert_eq!(g.occupied_count(), 6);
        assert_eq!(g.is_occupied(Point::new(1, 1)), Some(true));
        assert_eq!(g.is_occupied(Point::new(2, 3)), Some(true));
        assert_eq!(g.is_occupied(Point::new(3, 1)), Some(false));
        assert_eq!(g.is_occupied(Point::new(1, 4)), Some(false));
        assert_eq!(g.to_string(), ".....\n.##..\n.##..\n.##..\n.....");
    }

    #[test]
    fn overlapping_rectangles_union() {
        let g = OccupancyGrid::build(
            4,
            4,
            &[ObstacleRect::new(0, 2, 0, 0), ObstacleRect::new(1, 3, 0, 1)],
        )
        .unwrap();
        assert_eq!(g.occupied_count(), 7);
        assert_eq!(g.to_string(), "####\n.###\n....\n....");
    }

    #[test]
    fn single_cell_obstacle() {
        let g = OccupancyGrid::build(3, 2, &[ObstacleRect::cell(Point::new(1, 1))]).unwrap();
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.to_string(), "...\n.#.");
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            OccupancyGrid::empty(0, 5),
            Err(GeometryError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(OccupancyGrid::empty(3, -1).is_err());
    }

    #[test]
    fn rejects_obstacle_outside_grid() {
        let rect = ObstacleRect::new(3, 5, 0, 0);
        let err = OccupancyGrid::build(5, 5, &[ObstacleRect::cell(Point::ZERO), rect]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::ObstacleOutOfBounds {
                index: 1,
                rect,
                bounds: Range::with_size(5, 5),
            }
        );
        assert!(OccupancyGrid::build(5, 5, &[ObstacleRect::new(-1, 0, 0, 0)]).is_err());
    }

    #[test]
    fn rejects_obstacle_reaching_i32_limits() {
        let bounds = Range::with_size(5, 5);
        for rect in [
            ObstacleRect::new(0, i32::MAX, 0, 0),
            ObstacleRect::new(0, 0, 0, i32::MAX),
            ObstacleRect::new(0, i32::MAX - 1, 0, 0),
            ObstacleRect::new(i32::MIN, 0, 0, 0),
            ObstacleRect::new(0, 0, i32::MIN, 0),
            ObstacleRect::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX),
        ] {
            assert_eq!(
                OccupancyGrid::build(5, 5, &[rect]),
                Err(GeometryError::ObstacleOutOfBounds {
                    index: 0,
                    rect,
                    bounds,
                }),
                "{rect}"
            );
        }
    }

    #[test]
    fn rejects_obstacle_past_far_edge_only() {
        let rect = ObstacleRect::new(1, 1_000_000, 2, 3);
        assert!(matches!(
            OccupancyGrid::build(5, 5, &[rect]),
            Err(GeometryError::ObstacleOutOfBounds { index: 0, .. })
        ));
        let rect = ObstacleRect::new(1, 2, 2, 1_000_000);
        assert!(OccupancyGrid::build(5, 5, &[rect]).is_err());
    }

    #[test]
    fn obstacle_touching_far_edges_is_accepted() {
        let g = OccupancyGrid::build(5, 5, &[ObstacleRect::new(3, 4, 4, 4)]).unwrap();
        assert_eq!(g.occupied_count(), 2);
        assert_eq!(g.is_occupied(Point::new(4, 4)), Some(true));
    }

    #[test]
    fn rejects_inverted_obstacle() {
        let rect = ObstacleRect::new(2, 1, 0, 0);
        assert_eq!(
            OccupancyGrid::build(5, 5, &[rect]),
            Err(GeometryError::InvertedObstacle { index: 0, rect })
        );
    }
}
