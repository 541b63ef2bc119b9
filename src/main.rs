//! salary-guide - Graybook salary CSV to widget JSON converter
//!
//! One-shot batch CLI: reads a campus salary CSV, groups rows into
//! per-employee aggregates, optionally classifies position titles, and
//! writes the name-sorted JSON document the salary guide widget loads.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing input, malformed salary, write failure)
//!   2 - Usage error (missing required arguments, reported by clap)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use salary_guide::pipeline::{RunOptions, run};

/// Convert a Graybook salary CSV into salary-guide widget JSON
///
/// One CSV per campus/unit (UIUC, UIC, UIS, UI System each have their own
/// file). Rows sharing a (name, total salary) key are grouped into one
/// employee entry; `--classify` additionally tags every position with a
/// heuristic title category.
///
/// Examples:
///   salary-guide --input input/UIS.csv --output output/UIS.json
///   salary-guide --input input/UIS.csv --output output/UIS.json --classify
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the salary CSV file for a single campus/unit
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Path to write the salary guide JSON to
    ///
    /// The parent directory must already exist. Nothing is written if any
    /// stage of the run fails.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Annotate each position with a heuristic position-type label
    #[arg(long)]
    classify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    let options = RunOptions {
        input: args.input,
        output: args.output,
        classify: args.classify,
    };

    match run(&options) {
        Ok(summary) => {
            info!(
                rows = summary.rows_read,
                employees = summary.employees,
                classified = summary.classified,
                "salary guide written"
            );
            println!(
                "{} rows read, {} employees written to {}",
                summary.rows_read,
                summary.employees,
                options.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
