//! **hops-core**: grid geometry for the hopper search.
//!
//! This crate provides the plain data the search engine works on: geometry
//! primitives, inclusive obstacle rectangles, test cases, and the
//! [`OccupancyGrid`] built from them. All input geometry is validated here
//! and reported as a [`GeometryError`] rather than causing an out-of-range
//! access later on.

pub mod case;
pub mod error;
pub mod geom;
pub mod grid;
pub mod obstacle;

pub use case::{TestCase, check_endpoint};
pub use error::{GeometryError, PointRole};
pub use geom::{Point, Range};
pub use grid::OccupancyGrid;
pub use obstacle::ObstacleRect;
