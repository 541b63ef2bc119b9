//! Grouped output models serialized for the salary guide widget.
//!
//! This module defines [`EmployeeAggregate`] and [`PositionEntry`], the
//! structures the widget loads from the generated JSON. Field names follow
//! the widget's camelCase convention, and monetary fields serialize as JSON
//! numbers rather than the crate-default decimal strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::PositionType;

/// One position held by an employee, as emitted in the output JSON.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_guide::models::PositionEntry;
///
/// let entry = PositionEntry {
///     title: "Assoc Prof".to_string(),
///     department: "Computer Science".to_string(),
///     college: "Engineering".to_string(),
///     position_salary: Decimal::new(5000000, 2),
///     tenure: "Indefinite tenure".to_string(),
///     pay_type: "AL".to_string(),
///     position_type: None,
/// };
/// let json = serde_json::to_string(&entry).unwrap();
/// assert!(json.contains("\"positionSalary\":50000.0"));
/// assert!(!json.contains("positionType"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    /// The free-text job title.
    pub title: String,
    /// The department the position belongs to.
    pub department: String,
    /// The college the department belongs to.
    pub college: String,
    /// The salary attributed to this position alone.
    #[serde(with = "rust_decimal::serde::float")]
    pub position_salary: Decimal,
    /// Descriptive tenure phrase, empty when the position carries none.
    pub tenure: String,
    /// Pay type code, passed through verbatim from the input row.
    pub pay_type: String,
    /// Heuristic title category, present only when classification ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<PositionType>,
}

/// All positions for one employee, grouped under a (name, total salary) key.
///
/// `salary` is the employee's total salary across positions, distinct from
/// any single position's salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    /// The employee's name.
    pub name: String,
    /// The employee's total salary, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    /// Positions in first-seen input order.
    pub positions: Vec<PositionEntry>,
}
