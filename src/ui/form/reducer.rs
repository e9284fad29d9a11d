//! Reducer for the application form.

use crate::form::{validate, validate_live, Field, Skill};
use crate::ui::mvi::Reducer;

use super::intent::{FieldChange, FormIntent};
use super::state::{Focus, FormState};

/// Reducer for form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Change(change) => {
                if state.is_disabled() {
                    return state;
                }
                apply_change(state, change)
            }

            FormIntent::Submit => {
                if state.is_disabled() {
                    return state;
                }
                let errors = validate(&state.values);
                FormState {
                    submitting: errors.is_empty(),
                    errors,
                    ..state
                }
            }

            FormIntent::Completed { confirmation } => FormState {
                submitted: true,
                confirmation: Some(confirmation),
                ..FormState::default()
            },

            // Messages stay until the next submit or live edit.
            FormIntent::Reset => FormState {
                errors: state.errors,
                ..FormState::default()
            },

            FormIntent::DismissConfirmation => FormState {
                submitted: false,
                confirmation: None,
                ..state
            },

            FormIntent::FocusNext => move_focus(state, 1),
            FormIntent::FocusPrev => move_focus(state, -1),

            FormIntent::MoveSkillCursor(delta) => {
                let len = Skill::ALL.len() as isize;
                let cursor = (state.skill_cursor as isize + delta).rem_euclid(len) as usize;
                FormState {
                    skill_cursor: cursor,
                    ..state
                }
            }
        }
    }
}

fn apply_change(mut state: FormState, change: FieldChange) -> FormState {
    let field = change.field();
    match change {
        FieldChange::Text { value, .. } => {
            let Some(slot) = field.text_mut(&mut state.values) else {
                return state;
            };
            *slot = value;
        }
        FieldChange::Position(position) => {
            state.values.applying_for_position = position;
            // Focus may sit on a conditional field that just got hidden.
            if let Focus::Field(focused) = state.focus {
                if !focused.is_visible(&state.values) {
                    state.focus = Focus::Field(Field::ApplyingForPosition);
                }
            }
        }
        FieldChange::Skill { skill, checked } => state.values.set_skill(skill, checked),
    }

    if let Some(message) = validate_live(field, &state.values) {
        state.errors.set(field, message);
    }
    state
}

fn move_focus(state: FormState, step: isize) -> FormState {
    let order = state.focus_order();
    let len = order.len() as isize;
    let next = match order.iter().position(|focus| *focus == state.focus) {
        Some(index) => order[(index as isize + step).rem_euclid(len) as usize],
        None => order[0],
    };
    FormState {
        focus: next,
        ..state
    }
}
