//! The fixed position-type taxonomy.

use serde::{Deserialize, Serialize};

/// Heuristic category assigned to a position title.
///
/// The serialized form is the exact label the widget filters on, e.g.
/// `PositionType::AssocProf` serializes as `"ASSOC PROF"`.
///
/// # Example
///
/// ```
/// use salary_guide::classify::PositionType;
///
/// let json = serde_json::to_string(&PositionType::OfficeSupport).unwrap();
/// assert_eq!(json, "\"OFFICE SUPPORT\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    /// Assistant professor.
    #[serde(rename = "ASST PROF")]
    AsstProf,
    /// Associate professor.
    #[serde(rename = "ASSOC PROF")]
    AssocProf,
    /// Full professor.
    #[serde(rename = "PROF")]
    Prof,
    /// Lecturer or instructor.
    #[serde(rename = "INSTRUCTOR")]
    Instructor,
    /// Postdoctoral appointment.
    #[serde(rename = "POSTDOC")]
    Postdoc,
    /// Research position that is not a directorship or coordination role.
    #[serde(rename = "MISC RES")]
    MiscRes,
    /// Visiting or resident scholar.
    #[serde(rename = "MISC SCHOLAR")]
    MiscScholar,
    /// Director.
    #[serde(rename = "DIRECTOR")]
    Director,
    /// Coordinator.
    #[serde(rename = "COORDINATOR")]
    Coordinator,
    /// Manager.
    #[serde(rename = "MANAGER")]
    Manager,
    /// Specialist.
    #[serde(rename = "SPECIALIST")]
    Specialist,
    /// Office support and building service staff.
    #[serde(rename = "OFFICE SUPPORT")]
    OfficeSupport,
    /// Athletic coach.
    #[serde(rename = "COACH")]
    Coach,
    /// Police position.
    #[serde(rename = "POLICE")]
    Police,
    /// No rule matched.
    #[serde(rename = "OTHER")]
    Other,
}

impl std::fmt::Display for PositionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PositionType::AsstProf => "ASST PROF",
            PositionType::AssocProf => "ASSOC PROF",
            PositionType::Prof => "PROF",
            PositionType::Instructor => "INSTRUCTOR",
            PositionType::Postdoc => "POSTDOC",
            PositionType::MiscRes => "MISC RES",
            PositionType::MiscScholar => "MISC SCHOLAR",
            PositionType::Director => "DIRECTOR",
            PositionType::Coordinator => "COORDINATOR",
            PositionType::Manager => "MANAGER",
            PositionType::Specialist => "SPECIALIST",
            PositionType::OfficeSupport => "OFFICE SUPPORT",
            PositionType::Coach => "COACH",
            PositionType::Police => "POLICE",
            PositionType::Other => "OTHER",
        };
        write!(f, "{}", label)
    }
}
