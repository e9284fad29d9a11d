//! Application form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state (values, errors, submission flags, focus)
//! - `intent.rs` - User actions
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Owns the state and runs the completion callback
//! - `view.rs` - Field rendering
//! - `confirmation.rs` - Submission confirmation popup

mod confirmation;
mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use confirmation::render_confirmation;
pub use controller::{CompletionCallback, FormController, SubmitOutcome};
pub use intent::{FieldChange, FormIntent};
pub use reducer::FormReducer;
pub use state::{Focus, FormState};
pub use view::render_form;
