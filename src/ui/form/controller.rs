//! Form controller: owns one form's state and its completion callback.

use crate::form::{ErrorMap, Field, FormValues};
use crate::ui::mvi::Reducer;

use super::intent::{FieldChange, FormIntent};
use super::reducer::FormReducer;
use super::state::FormState;

/// Callback invoked with the submitted values once a submit passes validation.
pub type CompletionCallback = Box<dyn FnMut(&FormValues) + Send>;

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the callback ran and the form was reset.
    Accepted {
        /// Serialized values that were submitted.
        json: String,
    },
    /// Validation failed on these fields; their messages are now displayed.
    Rejected { failed: Vec<Field> },
    /// Inputs are disabled after a previous submission.
    Ignored,
}

pub struct FormController<F>
where
    F: FnMut(&FormValues),
{
    state: FormState,
    on_complete: F,
}

impl<F> FormController<F>
where
    F: FnMut(&FormValues),
{
    pub fn new(on_complete: F) -> Self {
        Self {
            state: FormState::default(),
            on_complete,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    /// Run an intent through the reducer and store the result.
    pub fn dispatch(&mut self, intent: FormIntent) {
        tracing::trace!(intent = intent_name(&intent), "form intent");
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Change handler: one input event for one field.
    pub fn change(&mut self, change: FieldChange) {
        self.dispatch(FormIntent::Change(change));
    }

    /// Submit handler.
    ///
    /// Runs full validation. Only when no field fails is the completion
    /// callback invoked, after which the form goes back to its defaults and
    /// shows the serialized values as a confirmation.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_disabled() {
            return SubmitOutcome::Ignored;
        }

        self.dispatch(FormIntent::Submit);
        if !self.state.submitting {
            let failed: Vec<Field> = self.state.errors.fields().collect();
            tracing::debug!(?failed, "submission rejected");
            return SubmitOutcome::Rejected { failed };
        }

        let values = self.state.values.clone();
        (self.on_complete)(&values);

        let json = match values.to_pretty_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize submitted values");
                format!("{values:#?}")
            }
        };
        self.dispatch(FormIntent::Completed {
            confirmation: json.clone(),
        });
        tracing::info!(
            position = values.applying_for_position.map(|p| p.as_str()),
            skills = values.additional_skills.len(),
            "application submitted"
        );
        SubmitOutcome::Accepted { json }
    }

    /// Reset handler: default values, no submitting or completion state.
    pub fn reset(&mut self) {
        self.dispatch(FormIntent::Reset);
        tracing::debug!("form reset");
    }

    pub fn dismiss_confirmation(&mut self) {
        self.dispatch(FormIntent::DismissConfirmation);
    }
}

fn intent_name(intent: &FormIntent) -> &'static str {
    match intent {
        FormIntent::Change(change) => change.field().name(),
        FormIntent::Submit => "submit",
        FormIntent::Completed { .. } => "completed",
        FormIntent::Reset => "reset",
        FormIntent::DismissConfirmation => "dismiss_confirmation",
        FormIntent::FocusNext => "focus_next",
        FormIntent::FocusPrev => "focus_prev",
        FormIntent::MoveSkillCursor(_) => "skill_cursor",
    }
}
