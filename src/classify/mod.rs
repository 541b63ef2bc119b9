//! Heuristic classification of position titles.
//!
//! This optional pipeline stage annotates every position with a category
//! label derived from its free-text title. The rule list is an ordered
//! first-match heuristic and makes no claim to being exhaustive.

mod position_type;
mod title_rules;

pub use position_type::PositionType;
pub use title_rules::{classify, classify_title};
