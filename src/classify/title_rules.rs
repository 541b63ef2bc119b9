//! The ordered title classification rules.
//!
//! Titles are normalized (commas and periods stripped, uppercased, split on
//! whitespace) and matched against a priority list: rules are evaluated top
//! to bottom and the first satisfied predicate wins. The order is load
//! bearing — "RES COORD" must classify as COORDINATOR, not MISC RES.
//!
//! The list is a known-incomplete heuristic inherited from the widget's
//! original data prep and is kept exactly as documented there; it is not
//! meant to be extended opportunistically.

use crate::classify::PositionType;
use crate::models::{EmployeeAggregate, PositionEntry};

/// Classifies a free-text position title into the fixed taxonomy.
///
/// Deterministic: a given title always yields the label of the first
/// matching rule. Titles matching no rule yield [`PositionType::Other`].
///
/// # Example
///
/// ```
/// use salary_guide::classify::{classify_title, PositionType};
///
/// assert_eq!(classify_title("Assoc. Prof, Computer Science"), PositionType::AssocProf);
/// assert_eq!(classify_title("Building Service Worker"), PositionType::OfficeSupport);
/// assert_eq!(classify_title("RES COORD"), PositionType::Coordinator);
/// ```
pub fn classify_title(title: &str) -> PositionType {
    let normalized = title.replace([',', '.'], "").to_uppercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let has = |token: &str| tokens.iter().any(|&t| t == token);
    let adjacent =
        |first: &str, second: &str| tokens.windows(2).any(|w| w[0] == first && w[1] == second);

    if adjacent("ASST", "PROF") || adjacent("ASST", "PROFESSOR") {
        PositionType::AsstProf
    } else if adjacent("ASSOC", "PROF") || adjacent("ASSOC", "PROFESSOR") {
        PositionType::AssocProf
    } else if has("PROF") || has("PROFESSOR") {
        PositionType::Prof
    } else if has("LECTURER") || has("INSTRUCTOR") || has("INSTR") {
        PositionType::Instructor
    } else if has("POSTDOC") {
        PositionType::Postdoc
    } else if has("RES") && !has("DIR") && !has("COORD") {
        PositionType::MiscRes
    } else if has("SCHOLAR") {
        PositionType::MiscScholar
    } else if has("DIRECTOR") || has("DIR") {
        PositionType::Director
    } else if has("COORDINATOR") || has("COORD") {
        PositionType::Coordinator
    } else if has("MANAGER") || has("MGR") {
        PositionType::Manager
    } else if has("SPECIALIST") || has("SPEC") {
        PositionType::Specialist
    } else if adjacent("OFFICE", "SUPPORT") {
        PositionType::OfficeSupport
    } else if adjacent("BUILDING", "SERVICE") {
        PositionType::OfficeSupport
    } else if has("COACH") {
        PositionType::Coach
    } else if has("POLICE") {
        PositionType::Police
    } else {
        PositionType::Other
    }
}

/// Annotates every position in every aggregate with its title category.
///
/// Pure transform: consumes the aggregates and returns new ones with
/// `position_type` set on each [`PositionEntry`]; nothing else changes.
pub fn classify(aggregates: Vec<EmployeeAggregate>) -> Vec<EmployeeAggregate> {
    aggregates
        .into_iter()
        .map(|employee| EmployeeAggregate {
            positions: employee
                .positions
                .into_iter()
                .map(|position| PositionEntry {
                    position_type: Some(classify_title(&position.title)),
                    ..position
                })
                .collect(),
            ..employee
        })
        .collect()
}
