//! Intents for the application form.

use crate::form::{Field, Position, Skill};
use crate::ui::mvi::Intent;

/// New value for one field, as produced by a single input event.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    /// Full new content of a text field.
    Text { field: Field, value: String },
    /// Selected position; `None` is the "Select a position" entry.
    Position(Option<Position>),
    /// A skill checkbox was ticked or unticked.
    Skill { skill: Skill, checked: bool },
}

impl FieldChange {
    /// The field this change writes to.
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Text { field, .. } => *field,
            FieldChange::Position(_) => Field::ApplyingForPosition,
            FieldChange::Skill { .. } => Field::AdditionalSkills,
        }
    }
}

/// Intents that can be dispatched to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// A field changed. Ignored while inputs are disabled.
    Change(FieldChange),

    /// Run full validation; `submitting` is set only when it passes.
    Submit,

    /// The completion callback ran for a passing submit.
    Completed {
        /// Serialized values shown to the user.
        confirmation: String,
    },

    /// Restore default values and clear the submitting and completion state.
    /// Error messages are left as they are.
    Reset,

    /// User acknowledged the submission confirmation.
    DismissConfirmation,

    /// Move focus to the next visible field or button.
    FocusNext,

    /// Move focus to the previous visible field or button.
    FocusPrev,

    /// Move the highlighted entry of the skills checklist.
    MoveSkillCursor(isize),
}

impl Intent for FormIntent {}
