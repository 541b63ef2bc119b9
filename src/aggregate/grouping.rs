//! Grouping of position rows into employee aggregates.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::aggregate::EmployeeKey;
use crate::error::{GuideError, GuideResult};
use crate::models::{EmployeeAggregate, PositionEntry, PositionRecord, tenure_status};

/// Groups position rows into per-employee aggregates.
///
/// Rows are folded in order under their [`EmployeeKey`]: the first row for
/// a key creates the aggregate (with `salary` set to the parsed total
/// salary), and every later row with the same key appends a position to it.
/// Two rows with the same name but total salaries differing by at least a
/// cent always land in distinct aggregates, which keeps unrelated
/// appointments and cross-period salary corrections separate.
///
/// Entirely empty rows are skipped and do not count toward row numbering.
/// A non-numeric `total_salary` or `position_salary` fails the whole run
/// with [`GuideError::SalaryParse`] naming the offending row and value.
///
/// Aggregates are returned in first-seen-key order; sorting by name happens
/// at the pipeline boundary, not here.
///
/// # Example
///
/// ```
/// use salary_guide::aggregate::aggregate;
/// use salary_guide::models::PositionRecord;
///
/// let rows = vec![
///     PositionRecord {
///         name: "Jane Doe".to_string(),
///         total_salary: "50000.00".to_string(),
///         position_title: "Assoc Prof".to_string(),
///         department: "Computer Science".to_string(),
///         college: "Engineering".to_string(),
///         position_salary: "50000.00".to_string(),
///         tenure: "A".to_string(),
///         pay_type: "AL".to_string(),
///     },
///     PositionRecord {
///         name: "Jane Doe".to_string(),
///         total_salary: "50000.00".to_string(),
///         position_title: "Director".to_string(),
///         department: "Computer Science".to_string(),
///         college: "Engineering".to_string(),
///         position_salary: "0.00".to_string(),
///         tenure: "".to_string(),
///         pay_type: "BA".to_string(),
///     },
/// ];
///
/// let aggregates = aggregate(&rows).unwrap();
/// assert_eq!(aggregates.len(), 1);
/// assert_eq!(aggregates[0].positions.len(), 2);
/// ```
pub fn aggregate(rows: &[PositionRecord]) -> GuideResult<Vec<EmployeeAggregate>> {
    let mut aggregates: Vec<EmployeeAggregate> = Vec::new();
    let mut index: HashMap<EmployeeKey, usize> = HashMap::new();

    // Row numbering starts at 1 over non-empty rows, matching the count
    // reported by the pipeline.
    let mut row = 0usize;

    for record in rows {
        if record.is_empty() {
            continue;
        }
        row += 1;

        let total_salary = parse_salary(&record.total_salary, "total_salary", row)?;
        let position_salary = parse_salary(&record.position_salary, "position_salary", row)?;

        let entry = PositionEntry {
            title: record.position_title.clone(),
            department: record.department.clone(),
            college: record.college.clone(),
            position_salary,
            tenure: tenure_status(&record.tenure).to_string(),
            pay_type: record.pay_type.clone(),
            position_type: None,
        };

        let key = EmployeeKey::new(&record.name, total_salary);
        match index.get(&key) {
            Some(&existing) => aggregates[existing].positions.push(entry),
            None => {
                index.insert(key, aggregates.len());
                aggregates.push(EmployeeAggregate {
                    name: record.name.clone(),
                    salary: total_salary,
                    positions: vec![entry],
                });
            }
        }
    }

    Ok(aggregates)
}

/// Parses a raw salary cell, reporting the row and value on failure.
fn parse_salary(value: &str, field: &str, row: usize) -> GuideResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| GuideError::SalaryParse {
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}
