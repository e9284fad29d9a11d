//! Form data model and validation.
//!
//! Nothing in here knows about the terminal: values, field metadata, the
//! error map and the pure validation rules.

mod errors;
mod field;
mod validation;
mod values;

pub use errors::ErrorMap;
pub use field::{visible_fields, Field, FieldKind};
pub use validation::{validate, validate_field, validate_live, MIN_FULL_NAME_CHARS};
pub use values::{FormValues, Position, Skill};
