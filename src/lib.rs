//! Salary guide pipeline for Graybook payroll exports.
//!
//! This crate converts a campus salary CSV (one row per employee position)
//! into the grouped, name-sorted JSON document consumed by the salary guide
//! display widget. Rows sharing a (name, total salary) key are collected into
//! a single employee aggregate, and an optional classification stage annotates
//! each position with a heuristic category derived from its title text.

#![warn(missing_docs)]

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod models;
pub mod pipeline;
