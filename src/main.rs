//! `dirseek` command line.
//!
//! Loads a directory file (`"<number> <name>"` per line) and a query file
//! (one name per line), runs the benchmark plans in order and prints one
//! report block per run.
//!
//! ```bash
//! dirseek --directory directory.txt --queries find.txt
//! dirseek --directory directory.txt --queries find.txt --run quick+jump --run hash
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `warn,dirseek=info`).

use anyhow::{Context, Result};
use clap::Parser;
use dirseek::budget::DEFAULT_RATIO;
use dirseek::report::Report;
use dirseek::{Benchmark, RunPlan, load};
use std::path::PathBuf;
use tracing::info;

/// Benchmark directory lookup strategies
#[derive(Parser, Debug)]
#[command(name = "dirseek", version)]
#[command(about = "Compare linear, sort-then-search and hash lookups over a phone directory")]
struct Cli {
    /// Directory file, one "<number> <name>" entry per line
    #[arg(long, env = "DIRSEEK_DIRECTORY")]
    directory: PathBuf,

    /// Query file, one name per line
    #[arg(long, env = "DIRSEEK_QUERIES")]
    queries: PathBuf,

    /// Sort budget as a multiple of the first linear search time
    #[arg(long, default_value_t = DEFAULT_RATIO, env = "DIRSEEK_RATIO")]
    ratio: u32,

    /// Plan to run: linear, hash or <sort>+<search> (repeatable; default: the full suite)
    #[arg(long = "run", value_name = "PLAN")]
    runs: Vec<RunPlan>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,dirseek=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let plans = if cli.runs.is_empty() {
        RunPlan::default_suite()
    } else {
        cli.runs
    };

    let directory = load::read_directory(&cli.directory).context("loading directory")?;
    let queries = load::read_lines(&cli.queries).context("loading queries")?;
    info!(
        entries = directory.len(),
        queries = queries.len(),
        ratio = cli.ratio,
        runs = plans.len(),
        "starting benchmark"
    );

    let mut bench = Benchmark::new(directory, queries).with_ratio(cli.ratio);
    for (i, result) in bench.run_suite(&plans).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", Report(result));
    }

    Ok(())
}
