//! Minimum-hop search for a hopper on an obstacle grid.
//!
//! A hopper moves in discrete hops. Each hop it may change its velocity by at
//! most one unit per axis, keeping either component within the speed cap,
//! and then moves by the new velocity. It may fly over obstacles but must
//! land on free cells inside the grid.
//!
//! The search runs breadth-first over (position, velocity) states rather than
//! over cells, so the first time the finish cell is taken off the frontier
//! its hop count is optimal.
//!
//! - [`HopSearch::shortest_hop_count`] solves a single grid.
//! - [`min_hops`] / [`min_hops_par`] solve a list of [`TestCase`](hops_core::TestCase)s.
//!
//! # Extension points
//!
//! | Trait | Role |
//! |---|---|
//! | [`Terrain`] | which cells exist and which may be landed on |
//! | [`SearchMonitor`] | observe frontier events during a search |

mod batch;
mod bfs;
mod config;
mod monitor;
mod result;
mod search;
mod state;
mod successors;
mod traits;

pub use batch::{BatchError, min_hops, min_hops_par};
pub use config::{MAX_SPEED, SearchConfig};
pub use monitor::{NoOpMonitor, RecordingMonitor, SearchMonitor};
pub use result::{SearchResult, SearchStats};
pub use search::HopSearch;
pub use state::{HopperState, StateKey};
pub use successors::{ACCELERATIONS, Successors, is_valid_velocity};
pub use traits::Terrain;
