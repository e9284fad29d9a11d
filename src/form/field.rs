use crate::form::values::{FormValues, Position};
use serde::Serialize;

/// Identifies one input of the form.
///
/// Declaration order is display order; `ErrorMap` iterates in this order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "applyingForPosition")]
    ApplyingForPosition,
    #[serde(rename = "relevantExperience")]
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    #[serde(rename = "managementExperience")]
    ManagementExperience,
    #[serde(rename = "additionalSkills")]
    AdditionalSkills,
    #[serde(rename = "preferredInterviewTime")]
    PreferredInterviewTime,
}

/// How a field takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Checklist,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::ApplyingForPosition,
        Field::RelevantExperience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::AdditionalSkills,
        Field::PreferredInterviewTime,
    ];

    /// Key used for this field in the error map and the submitted JSON.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::ApplyingForPosition => "applyingForPosition",
            Field::RelevantExperience => "relevantExperience",
            Field::PortfolioUrl => "portfolioURL",
            Field::ManagementExperience => "managementExperience",
            Field::AdditionalSkills => "additionalSkills",
            Field::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::ApplyingForPosition => "Applying for Position",
            Field::RelevantExperience => "Relevant Experience (years)",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::ApplyingForPosition => FieldKind::Select,
            Field::AdditionalSkills => FieldKind::Checklist,
            _ => FieldKind::Text,
        }
    }

    /// Fields that are only shown for some positions.
    pub fn is_conditional(self) -> bool {
        matches!(
            self,
            Field::RelevantExperience | Field::PortfolioUrl | Field::ManagementExperience
        )
    }

    /// Fields re-validated on every keystroke rather than only on submit.
    pub fn is_live_validated(self) -> bool {
        matches!(self, Field::FullName | Field::PhoneNumber)
    }

    /// Whether the field is shown (and required) for the selected position.
    pub fn is_visible(self, values: &FormValues) -> bool {
        let position = values.applying_for_position;
        match self {
            Field::RelevantExperience => position.is_some_and(Position::requires_experience),
            Field::PortfolioUrl => position == Some(Position::Designer),
            Field::ManagementExperience => position == Some(Position::Manager),
            _ => true,
        }
    }

    /// Text content of a text field, `None` for select and checklist fields.
    pub fn text<'a>(self, values: &'a FormValues) -> Option<&'a str> {
        let text = match self {
            Field::FullName => &values.full_name,
            Field::Email => &values.email,
            Field::PhoneNumber => &values.phone_number,
            Field::RelevantExperience => &values.relevant_experience,
            Field::PortfolioUrl => &values.portfolio_url,
            Field::ManagementExperience => &values.management_experience,
            Field::PreferredInterviewTime => &values.preferred_interview_time,
            Field::ApplyingForPosition | Field::AdditionalSkills => return None,
        };
        Some(text.as_str())
    }

    pub(crate) fn text_mut(self, values: &mut FormValues) -> Option<&mut String> {
        let text = match self {
            Field::FullName => &mut values.full_name,
            Field::Email => &mut values.email,
            Field::PhoneNumber => &mut values.phone_number,
            Field::RelevantExperience => &mut values.relevant_experience,
            Field::PortfolioUrl => &mut values.portfolio_url,
            Field::ManagementExperience => &mut values.management_experience,
            Field::PreferredInterviewTime => &mut values.preferred_interview_time,
            Field::ApplyingForPosition | Field::AdditionalSkills => return None,
        };
        Some(text)
    }
}

/// Fields currently shown, in display order.
pub fn visible_fields(values: &FormValues) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field.is_visible(values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_position(position: Option<Position>) -> FormValues {
        FormValues {
            applying_for_position: position,
            ..FormValues::default()
        }
    }

    #[test]
    fn unset_position_hides_conditional_fields() {
        let fields = visible_fields(&with_position(None));
        assert_eq!(fields.len(), 6);
        assert!(fields.iter().all(|field| !field.is_conditional()));
    }

    #[test]
    fn developer_shows_experience_only() {
        let fields = visible_fields(&with_position(Some(Position::Developer)));
        assert!(fields.contains(&Field::RelevantExperience));
        assert!(!fields.contains(&Field::PortfolioUrl));
        assert!(!fields.contains(&Field::ManagementExperience));
    }

    #[test]
    fn designer_shows_experience_and_portfolio() {
        let fields = visible_fields(&with_position(Some(Position::Designer)));
        assert!(fields.contains(&Field::RelevantExperience));
        assert!(fields.contains(&Field::PortfolioUrl));
        assert!(!fields.contains(&Field::ManagementExperience));
    }

    #[test]
    fn manager_shows_management_experience_only() {
        let fields = visible_fields(&with_position(Some(Position::Manager)));
        assert!(!fields.contains(&Field::RelevantExperience));
        assert!(!fields.contains(&Field::PortfolioUrl));
        assert!(fields.contains(&Field::ManagementExperience));
    }

    #[test]
    fn visible_fields_keep_display_order() {
        let fields = visible_fields(&with_position(Some(Position::Designer)));
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
        assert_eq!(fields.first(), Some(&Field::FullName));
        assert_eq!(fields.last(), Some(&Field::PreferredInterviewTime));
    }

    #[test]
    fn only_text_fields_expose_text() {
        let values = FormValues::default();
        assert_eq!(Field::Email.text(&values), Some(""));
        assert_eq!(Field::ApplyingForPosition.text(&values), None);
        assert_eq!(Field::AdditionalSkills.text(&values), None);
    }

    #[test]
    fn names_match_json_keys() {
        for field in Field::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.name());
        }
    }
}
