//! Solving whole lists of test cases.

use hops_core::{GeometryError, TestCase};
use rayon::prelude::*;
use thiserror::Error;

use crate::HopSearch;
use crate::config::SearchConfig;
use crate::result::SearchResult;

/// A test case in a batch could not be laid out on its grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("test case {}: {error}", .case + 1)]
pub struct BatchError {
    /// Zero-based position of the case in the input.
    pub case: usize,
    pub error: GeometryError,
}

fn solve_case(
    search: &mut HopSearch,
    index: usize,
    case: &TestCase,
) -> Result<SearchResult, BatchError> {
    let wrap = |error| BatchError { case: index, error };
    let grid = case.build_grid().map_err(wrap)?;
    log::trace!("test case {}:\n{grid}", index + 1);
    search
        .shortest_hop_count(&grid, case.start, case.finish)
        .map_err(wrap)
}

/// Solve every case in order, one result per case.
///
/// Stops at the first case with invalid geometry.
pub fn min_hops(config: SearchConfig, cases: &[TestCase]) -> Result<Vec<SearchResult>, BatchError> {
    log::info!("solving {} test case(s)", cases.len());
    let mut search = HopSearch::new(config);
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| solve_case(&mut search, i, case))
        .collect()
}

/// Parallel version of [`min_hops`]: cases are spread over the rayon thread
/// pool, each with its own engine. Results keep input order.
///
/// If several cases are invalid, the error of the earliest one is returned.
pub fn min_hops_par(
    config: SearchConfig,
    cases: &[TestCase],
) -> Result<Vec<SearchResult>, BatchError> {
    log::info!("solving {} test case(s) in parallel", cases.len());
    let results: Vec<Result<SearchResult, BatchError>> = cases
        .par_iter()
        .enumerate()
        .map_init(
            || HopSearch::new(config),
            |search, (i, case)| solve_case(search, i, case),
        )
        .collect();
    results.into_iter().collect()
}
