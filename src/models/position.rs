//! Input row model and the tenure-code lookup.
//!
//! This module defines the [`PositionRecord`] struct deserialized from one
//! CSV row and the fixed Graybook tenure-code table.

use serde::Deserialize;

/// A single position row as it appears in the salary CSV.
///
/// All fields are kept as raw strings; salary parsing happens during
/// aggregation so that a malformed value can be reported with its row
/// number. The `tenure` field holds the single-letter Graybook code, not
/// the descriptive phrase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionRecord {
    /// The employee's name as printed in the Graybook.
    pub name: String,
    /// The employee's total salary across all positions.
    pub total_salary: String,
    /// The free-text job title for this position.
    pub position_title: String,
    /// The department the position belongs to.
    pub department: String,
    /// The college the department belongs to.
    pub college: String,
    /// The salary attributed to this position alone.
    pub position_salary: String,
    /// Single-letter tenure code (see [`tenure_status`]).
    pub tenure: String,
    /// Pay type code, passed through verbatim.
    pub pay_type: String,
}

impl PositionRecord {
    /// Returns true when every field is the empty string.
    ///
    /// Entirely empty rows appear in exported CSVs and are skipped by the
    /// aggregator; they do not count toward the reported row total.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.total_salary.is_empty()
            && self.position_title.is_empty()
            && self.department.is_empty()
            && self.college.is_empty()
            && self.position_salary.is_empty()
            && self.tenure.is_empty()
            && self.pay_type.is_empty()
    }
}

/// Resolves a single-letter tenure code to its descriptive phrase.
///
/// The seven codes come from the Graybook documentation. Unrecognized or
/// missing codes resolve to an empty string rather than failing; the data
/// regularly contains blank tenure cells for untenured positions.
///
/// # Example
///
/// ```
/// use salary_guide::models::tenure_status;
///
/// assert_eq!(tenure_status("A"), "Indefinite tenure");
/// assert_eq!(tenure_status(""), "");
/// assert_eq!(tenure_status("Z"), "");
/// ```
pub fn tenure_status(code: &str) -> &'static str {
    match code {
        "A" => "Indefinite tenure",
        "M" => "Multi-Year Contract Agreement",
        "N" => "Initial/Partial Term",
        "P" => "Probationary Term",
        "Q" => "Specified Term Appointment",
        "T" => "Terminal Contract",
        "W" => "Special Agreement to Accept Academic Appointment and Reappointment for Definite Term",
        _ => "",
    }
}
