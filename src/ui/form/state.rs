//! State for the application form.

use crate::form::{visible_fields, ErrorMap, Field, FormValues, Skill};
use crate::ui::mvi::UiState;

/// Focusable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    SubmitButton,
    ResetButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::FullName)
    }
}

/// State owned by one form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub values: FormValues,
    pub errors: ErrorMap,
    /// Set by a submit whose validation passed, until completion runs.
    pub submitting: bool,
    /// Completion state: inputs are disabled while this is set.
    pub submitted: bool,
    /// Serialized values of the last accepted submission, while on screen.
    pub confirmation: Option<String>,
    pub focus: Focus,
    /// Highlighted entry of the skills checklist.
    pub skill_cursor: usize,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_disabled(&self) -> bool {
        self.submitted
    }

    pub fn is_confirming(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::SubmitButton | Focus::ResetButton => None,
        }
    }

    /// Skill under the checklist cursor.
    pub fn highlighted_skill(&self) -> Skill {
        Skill::ALL[self.skill_cursor % Skill::ALL.len()]
    }

    /// Focus cycle: visible fields in display order, then Submit and Reset.
    pub fn focus_order(&self) -> Vec<Focus> {
        visible_fields(&self.values)
            .into_iter()
            .map(Focus::Field)
            .chain([Focus::SubmitButton, Focus::ResetButton])
            .collect()
    }
}
