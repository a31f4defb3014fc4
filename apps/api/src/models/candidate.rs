use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The fixed set of positions a candidate may apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Artificial Intelligent Intern")]
    AiIntern,
    #[serde(rename = "Machine Learning Intern")]
    MlIntern,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::SoftwareEngineer,
        Position::DataScientist,
        Position::AiIntern,
        Position::MlIntern,
        Position::UiUxDesigner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::SoftwareEngineer => "Software Engineer",
            Position::DataScientist => "Data Scientist",
            Position::AiIntern => "Artificial Intelligent Intern",
            Position::MlIntern => "Machine Learning Intern",
            Position::UiUxDesigner => "UI/UX Designer",
        }
    }

    /// Parses a submitted label, case-insensitively. Unknown labels are a
    /// validation failure at the collection step.
    pub fn parse(input: &str) -> Option<Position> {
        let input = input.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(input))
    }

    pub fn labels() -> Vec<&'static str> {
        Position::ALL.into_iter().map(Position::label).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate profile, built incrementally: each field is set exactly once,
/// when its collection step is confirmed, and never overwritten except by a
/// full session reset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<f64>,
    pub desired_position: Option<Position>,
    pub current_location: Option<String>,
}

impl CandidateProfile {
    /// Set fields as `(key, rendered value)` pairs in collection order,
    /// for the record writer.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.full_name {
            fields.push(("full_name", v.clone()));
        }
        if let Some(v) = &self.email {
            fields.push(("email", v.clone()));
        }
        if let Some(v) = &self.phone {
            fields.push(("phone", v.clone()));
        }
        if let Some(v) = self.experience {
            // f64 Display drops a trailing ".0", so whole years print bare
            fields.push(("experience", v.to_string()));
        }
        if let Some(v) = self.desired_position {
            fields.push(("desired_position", v.to_string()));
        }
        if let Some(v) = &self.current_location {
            fields.push(("current_location", v.clone()));
        }
        fields
    }
}

/// Computed once when the question queue empties: the quiz result and the
/// outcome of the record write.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub average_score: f64,
    pub saved_to: Option<PathBuf>,
    pub save_warning: Option<String>,
}
