//! The one-shot CSV-to-JSON pipeline.
//!
//! This module wires the stages together: read the salary CSV, aggregate
//! rows into employees, optionally classify position titles, sort by name,
//! and write the widget JSON. Any error aborts the run before the output
//! file is touched.

mod reader;
mod writer;

pub use reader::read_records;
pub use writer::{sort_by_name, write_guide};

use std::path::PathBuf;

use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::error::GuideResult;

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the salary CSV for a single campus/unit.
    pub input: PathBuf,
    /// Path the widget JSON is written to.
    pub output: PathBuf,
    /// Whether to annotate positions with heuristic title categories.
    pub classify: bool,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-empty data rows read from the CSV.
    pub rows_read: usize,
    /// Employee aggregates written to the output.
    pub employees: usize,
    /// Whether the classification stage ran.
    pub classified: bool,
}

/// Runs the full pipeline for one campus CSV.
///
/// Reads all rows into memory, aggregates, optionally classifies, sorts by
/// name ascending (stable, so equal names keep their grouping order) and
/// writes the tab-indented JSON array. The output file is only created
/// once every prior stage has succeeded.
pub fn run(options: &RunOptions) -> GuideResult<RunSummary> {
    info!(input = %options.input.display(), "reading salary records");
    let records = read_records(&options.input)?;
    let rows_read = records.iter().filter(|r| !r.is_empty()).count();
    info!(rows = rows_read, "rows read");

    let mut aggregates = aggregate(&records)?;
    debug!(employees = aggregates.len(), "rows aggregated");

    if options.classify {
        info!("classifying position titles");
        aggregates = classify(aggregates);
    }

    sort_by_name(&mut aggregates);

    info!(
        output = %options.output.display(),
        employees = aggregates.len(),
        "writing salary guide"
    );
    write_guide(&options.output, &aggregates)?;

    Ok(RunSummary {
        rows_read,
        employees: aggregates.len(),
        classified: options.classify,
    })
}
