use std::fmt;

/// Outcome of one minimum-hop search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "hops", rename_all = "snake_case"))]
pub enum SearchResult {
    /// The finish is reachable; the value is the fewest hops needed.
    Solved(u32),
    /// No sequence of legal hops reaches the finish.
    Unsolved,
}

impl SearchResult {
    /// The hop count, if solved.
    #[inline]
    pub fn hops(self) -> Option<u32> {
        match self {
            Self::Solved(n) => Some(n),
            Self::Unsolved => None,
        }
    }

    #[inline]
    pub fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(n) => write!(f, "Optimal solution takes {n} hops."),
            Self::Unsolved => f.write_str("No solution."),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States taken off the frontier.
    pub expanded: usize,
    /// States pushed onto the frontier, the start state included.
    pub discovered: usize,
    /// Largest frontier length seen.
    pub peak_frontier: usize,
    /// Hop count of the last state taken off the frontier.
    pub depth: u32,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} discovered={} peak_frontier={} depth={}",
            self.expanded, self.discovered, self.peak_frontier, self.depth
        )
    }
}
