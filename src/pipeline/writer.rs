//! Name-sorted JSON emission for the widget.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GuideError, GuideResult};
use crate::models::EmployeeAggregate;

/// Sorts aggregates by name, ascending.
///
/// The sort is stable: aggregates with equal names keep the relative order
/// the aggregator produced them in.
pub fn sort_by_name(aggregates: &mut [EmployeeAggregate]) {
    aggregates.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Writes the aggregates as a tab-indented UTF-8 JSON array.
///
/// The document is serialized fully in memory first; the output path is
/// only created once serialization has succeeded, so a failed run never
/// leaves a partial file behind. Tab indentation matches the JSON files
/// the widget already ships with.
pub fn write_guide<P: AsRef<Path>>(
    path: P,
    aggregates: &[EmployeeAggregate],
) -> GuideResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    aggregates
        .serialize(&mut serializer)
        .map_err(|e| GuideError::OutputWrite {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    fs::write(path, &buffer).map_err(|e| GuideError::OutputWrite {
        path: path_str,
        message: e.to_string(),
    })
}
