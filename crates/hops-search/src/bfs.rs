use hops_core::{GeometryError, Point, PointRole, check_endpoint};

use crate::HopSearch;
use crate::monitor::{NoOpMonitor, SearchMonitor};
use crate::result::SearchResult;
use crate::state::HopperState;
use crate::traits::Terrain;

impl HopSearch {
    /// Fewest hops needed to get from `start` to `finish` on `terrain`.
    ///
    /// The hopper starts at rest. Both endpoints must lie inside
    /// `terrain.bounds()`; otherwise a [`GeometryError::PointOutOfBounds`] is
    /// returned and no search is run. The start cell itself may be occupied,
    /// only landings are checked.
    pub fn shortest_hop_count<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        start: Point,
        finish: Point,
    ) -> Result<SearchResult, GeometryError> {
        self.shortest_hop_count_with(terrain, start, finish, NoOpMonitor)
    }

    /// Same as [`shortest_hop_count`](Self::shortest_hop_count), reporting
    /// every frontier event to `monitor`.
    pub fn shortest_hop_count_with<T, M>(
        &mut self,
        terrain: &T,
        start: Point,
        finish: Point,
        mut monitor: M,
    ) -> Result<SearchResult, GeometryError>
    where
        T: Terrain + ?Sized,
        M: SearchMonitor,
    {
        let bounds = terrain.bounds();
        check_endpoint(PointRole::Start, start, bounds)?;
        check_endpoint(PointRole::Finish, finish, bounds)?;

        self.reset();
        let init = HopperState::at_rest(start);
        self.discover(init);
        monitor.on_enqueue(&init);

        let max_speed = self.config.max_speed;
        let mut successors = std::mem::take(&mut self.successors);

        let result = loop {
            let Some(cs) = self.frontier.pop_front() else {
                break SearchResult::Unsolved;
            };
            self.stats.expanded += 1;
            self.stats.depth = cs.hops;
            monitor.on_dequeue(&cs);

            if cs.pos == finish {
                break SearchResult::Solved(cs.hops);
            }

            for &ns in successors.of(terrain, &cs, max_speed) {
                if self.discover(ns) {
                    monitor.on_enqueue(&ns);
                }
            }
        };

        self.successors = successors;
        log::debug!("hop search {start} -> {finish} in {bounds}: {result} ({})", self.stats);
        Ok(result)
    }
}
