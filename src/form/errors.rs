use crate::form::field::Field;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validation messages for the current values.
///
/// A field without an entry passed its rules (or has not been checked yet).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, or clear it when `message` is `None`.
    pub fn set(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(message) => {
                self.entries.insert(field, message);
            }
            None => {
                self.entries.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields with a message, in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(Field, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_none_clears_entry() {
        let mut errors = ErrorMap::new();
        errors.set(Field::Email, Some("Email is required".into()));
        assert!(errors.contains(Field::Email));

        errors.set(Field::Email, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn iterates_in_display_order() {
        let errors: ErrorMap = [
            (Field::PreferredInterviewTime, "b".to_string()),
            (Field::FullName, "a".to_string()),
        ]
        .into_iter()
        .collect();

        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::FullName, Field::PreferredInterviewTime]);
    }

    #[test]
    fn serializes_with_field_names() {
        let mut errors = ErrorMap::new();
        errors.set(Field::PhoneNumber, Some("bad".into()));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "phoneNumber": "bad" }));
    }
}
