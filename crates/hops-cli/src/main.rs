//! `hops`: print the minimum hop count of every puzzle in the input.
//!
//! Run: cargo run --bin hops -- puzzles.txt

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hops_cli::{OutputFormat, RunOptions, run};
use hops_search::{MAX_SPEED, SearchConfig};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "hops")]
#[command(about = "Minimum hop counts for hopper puzzles", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Largest absolute velocity on either axis, at least 1
    #[arg(long, default_value_t = MAX_SPEED, value_parser = clap::value_parser!(u16).range(1..))]
    max_speed: u16,

    /// Solve test cases on all cores
    #[arg(long)]
    parallel: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            _ => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let options = RunOptions {
        config: SearchConfig::with_max_speed(cli.max_speed),
        parallel: cli.parallel,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let input = cli.read_input()?;
    let output = run(&options, &input)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("writing results")?;
    Ok(())
}
