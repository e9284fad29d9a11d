//! Field values for one job application.

use indexmap::IndexSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// Position the applicant is applying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Whether the position asks for years of relevant experience.
    pub fn requires_experience(self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional skill the applicant can tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Skill {
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "css")]
    Css,
    #[serde(rename = "python")]
    Python,
}

impl Skill {
    /// Display order of the checklist.
    pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    pub fn label(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

/// Complete set of user-entered values.
///
/// Hidden conditional fields keep whatever was typed into them; only
/// validation and rendering look at the selected position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(serialize_with = "serialize_position")]
    pub applying_for_position: Option<Position>,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    /// Ticked skills in the order they were ticked.
    pub additional_skills: IndexSet<Skill>,
    pub preferred_interview_time: String,
}

impl FormValues {
    /// Check or uncheck a skill. The set never holds duplicates, and
    /// re-checking a ticked skill keeps its original position.
    pub fn set_skill(&mut self, skill: Skill, checked: bool) {
        if checked {
            self.additional_skills.insert(skill);
        } else {
            self.additional_skills.shift_remove(&skill);
        }
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }

    /// Two-space indented JSON, as shown in the submission confirmation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_position<S>(position: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(position.map(Position::as_str).unwrap_or(""))
}
