use std::collections::{HashSet, VecDeque};

use crate::config::SearchConfig;
use crate::result::SearchStats;
use crate::state::{HopperState, StateKey};
use crate::successors::Successors;

// ---------------------------------------------------------------------------
// HopSearch
// ---------------------------------------------------------------------------

/// Reusable minimum-hop search engine.
///
/// `HopSearch` owns the visited set, the frontier queue and the successor
/// buffer, so that running many searches in a row only allocates while the
/// caches are still growing. Every search clears them first; nothing carries
/// over from one call to the next except capacity.
#[derive(Debug, Clone)]
pub struct HopSearch {
    pub(crate) config: SearchConfig,
    pub(crate) visited: HashSet<StateKey>,
    pub(crate) frontier: VecDeque<HopperState>,
    pub(crate) successors: Successors,
    pub(crate) stats: SearchStats,
}

impl Default for HopSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl HopSearch {
    /// Create a new engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            successors: Successors::new(),
            stats: SearchStats::default(),
        }
    }

    /// The configuration every search of this engine uses.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Counters of the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Forget everything from the previous search.
    pub(crate) fn reset(&mut self) {
        self.visited.clear();
        self.frontier.clear();
        self.stats = SearchStats::default();
    }

    /// Mark `state` visited and queue it. Returns `false`, leaving the
    /// frontier untouched, if its key was already seen.
    #[inline]
    pub(crate) fn discover(&mut self, state: HopperState) -> bool {
        if !self.visited.insert(state.key()) {
            return false;
        }
        self.frontier.push_back(state);
        self.stats.discovered += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        true
    }
}
