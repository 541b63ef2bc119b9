//! Core data models for the salary guide pipeline.
//!
//! This module contains the input row model read from the salary CSV and
//! the grouped output models serialized for the display widget.

mod employee;
mod position;

pub use employee::{EmployeeAggregate, PositionEntry};
pub use position::{PositionRecord, tenure_status};
