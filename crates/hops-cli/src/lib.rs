//! Front end for the hopper search: reads puzzle text, solves every test
//! case and renders the results.

pub mod parse;

use anyhow::{Context, Result};
use hops_search::{SearchConfig, SearchResult, min_hops, min_hops_par};
use serde::Serialize;

pub use parse::{Location, ParseError, parse_input};

/// How the results are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One sentence per test case.
    #[default]
    Text,
    /// A JSON array with one object per test case.
    Json,
}

/// Settings for one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config: SearchConfig,
    pub parallel: bool,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CaseReport {
    case: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<u32>,
}

impl CaseReport {
    fn new(index: usize, result: SearchResult) -> Self {
        Self {
            case: index + 1,
            status: if result.is_solved() { "solved" } else { "unsolved" },
            hops: result.hops(),
        }
    }
}

/// Render results as text, one line per test case.
pub fn render_text(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("{r}\n"))
        .collect()
}

/// Render results as a pretty-printed JSON array, numbering cases from 1.
pub fn render_json(results: &[SearchResult]) -> Result<String> {
    let reports: Vec<CaseReport> = results
        .iter()
        .enumerate()
        .map(|(i, &result)| CaseReport::new(i, result))
        .collect();
    let mut out = serde_json::to_string_pretty(&reports).context("encoding results as JSON")?;
    out.push('\n');
    Ok(out)
}

/// Parse `input`, solve every test case and render the results.
pub fn run(options: &RunOptions, input: &str) -> Result<String> {
    let cases = parse_input(input).context("reading test cases")?;
    let results = if options.parallel {
        min_hops_par(options.config, &cases)
    } else {
        min_hops(options.config, &cases)
    }
    .context("solving test cases")?;

    match options.format {
        OutputFormat::Text => Ok(render_text(&results)),
        OutputFormat::Json => render_json(&results),
    }
}
