//! Aggregation of position rows into per-employee groupings.
//!
//! This module contains the composite employee key and the grouping
//! function that folds an ordered sequence of position rows into
//! first-seen-order employee aggregates.

mod grouping;
mod key;

pub use grouping::aggregate;
pub use key::{EmployeeKey, salary_display};
