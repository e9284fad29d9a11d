//! Validation rules for the application form.
//!
//! Every rule lives in [`validate_field`]. The submit pass ([`validate`]) runs
//! it for all fields; the live pass ([`validate_live`]) runs it for the fields
//! that are checked while typing. Both passes therefore always agree on
//! messages.

use crate::form::errors::ErrorMap;
use crate::form::field::Field;
use crate::form::values::{FormValues, Position};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const MIN_FULL_NAME_CHARS: usize = 5;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// `+`, a 1-3 digit country code, then exactly 9 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{1,3}[0-9]{9}$").expect("phone pattern compiles"));

const INTERVIEW_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Full pass: one entry per failing field.
pub fn validate(values: &FormValues) -> ErrorMap {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values).map(|message| (field, message)))
        .collect()
}

/// Live pass for a single edited field.
///
/// Returns `None` when the field is not validated while typing, otherwise the
/// rule result to store for it (`Some(None)` clears a previous message).
pub fn validate_live(field: Field, values: &FormValues) -> Option<Option<String>> {
    field
        .is_live_validated()
        .then(|| validate_field(field, values))
}

/// Message for the first rule `field` fails, if any.
///
/// Conditional fields never fail while their position is not selected.
pub fn validate_field(field: Field, values: &FormValues) -> Option<String> {
    let message = match field {
        Field::FullName => full_name(&values.full_name),
        Field::Email => email(&values.email),
        Field::PhoneNumber => phone_number(&values.phone_number),
        Field::ApplyingForPosition => values
            .applying_for_position
            .is_none()
            .then_some("Applying for Position is required"),
        Field::RelevantExperience => match values.applying_for_position {
            Some(position) if position.requires_experience() => {
                relevant_experience(&values.relevant_experience)
            }
            _ => None,
        },
        Field::PortfolioUrl => match values.applying_for_position {
            Some(Position::Designer) => portfolio_url(&values.portfolio_url),
            _ => None,
        },
        Field::ManagementExperience => match values.applying_for_position {
            Some(Position::Manager) if values.management_experience.is_empty() => {
                Some("Management Experience is required")
            }
            _ => None,
        },
        Field::AdditionalSkills => values
            .additional_skills
            .is_empty()
            .then_some("At least one Additional Skill must be selected"),
        Field::PreferredInterviewTime => interview_time(&values.preferred_interview_time),
    };
    message.map(str::to_string)
}

fn full_name(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Full Name is required")
    } else if value.chars().count() < MIN_FULL_NAME_CHARS {
        Some("Full Name must be at least 5 characters long")
    } else if value.chars().any(|c| c.is_ascii_digit()) {
        Some("Full Name cannot include a number")
    } else {
        None
    }
}

fn email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Email is required")
    } else if !EMAIL_RE.is_match(value) {
        Some("Email address is invalid")
    } else {
        None
    }
}

fn phone_number(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if value.is_empty() {
        Some("Phone Number is required")
    } else if !trimmed.starts_with('+') {
        Some("Phone Number must start with a country code (+)")
    } else if !PHONE_RE.is_match(trimmed) {
        Some("Phone Number must be in the format +CountrycodePhonenumber (e.g., +1234567890)")
    } else {
        None
    }
}

fn relevant_experience(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Relevant Experience is required");
    }
    match value.trim().parse::<f64>() {
        // Rejects NaN and the "inf"/"infinity" spellings f64 also parses.
        Ok(years) if years.is_finite() && years > 0.0 => None,
        _ => Some("Relevant Experience must be a number greater than 0"),
    }
}

fn portfolio_url(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Portfolio URL is required");
    }
    match Url::parse(value) {
        Ok(_) => None,
        Err(err) => {
            tracing::trace!(error = %err, "portfolio URL rejected");
            Some("Portfolio URL is not a valid URL")
        }
    }
}

fn interview_time(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Preferred Interview Time is required");
    }
    let trimmed = value.trim();
    let parsed = INTERVIEW_TIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(trimmed, format).is_ok());
    if parsed {
        None
    } else {
        Some("Preferred Interview Time must be a date and time (YYYY-MM-DD HH:MM)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_rules_apply_in_order() {
        assert_eq!(full_name(""), Some("Full Name is required"));
        assert_eq!(
            full_name("Ab1"),
            Some("Full Name must be at least 5 characters long")
        );
        assert_eq!(full_name("Agent 007"), Some("Full Name cannot include a number"));
        assert_eq!(full_name("Grace Hopper"), None);
    }

    #[test]
    fn full_name_counts_characters_not_bytes() {
        assert_eq!(full_name("Zoë Ö"), None);
        assert!(full_name("Éöü").is_some());
    }

    #[test]
    fn email_shape() {
        assert_eq!(email("a@b.c"), None);
        assert_eq!(email("a@b"), Some("Email address is invalid"));
        assert_eq!(email("not an email"), Some("Email address is invalid"));
    }

    #[test]
    fn phone_is_trimmed_before_matching() {
        assert_eq!(phone_number("  +12345678901 "), None);
        assert_eq!(
            phone_number("   "),
            Some("Phone Number must start with a country code (+)")
        );
    }

    #[test]
    fn phone_accepts_one_to_three_digit_country_codes() {
        assert_eq!(phone_number("+1234567890"), None);
        assert_eq!(phone_number("+123456789012"), None);
        assert!(phone_number("+1234567890123").is_some());
        assert!(phone_number("+12345 67890").is_some());
    }

    #[test]
    fn experience_accepts_decimals_and_rejects_nan() {
        assert_eq!(relevant_experience("2.5"), None);
        assert_eq!(relevant_experience(" 4 "), None);
        assert!(relevant_experience("NaN").is_some());
        for infinite in ["inf", "INF", "infinity", "Infinity", "+inf"] {
            assert_eq!(
                relevant_experience(infinite),
                Some("Relevant Experience must be a number greater than 0"),
                "expected error for {infinite:?}"
            );
        }
        assert!(relevant_experience("-1").is_some());
        assert!(relevant_experience("   ").is_some());
    }

    #[test]
    fn portfolio_requires_absolute_url() {
        assert_eq!(portfolio_url("https://example.com"), None);
        assert_eq!(portfolio_url("mailto:me@example.com"), None);
        assert_eq!(
            portfolio_url("example.com/work"),
            Some("Portfolio URL is not a valid URL")
        );
    }

    #[test]
    fn interview_time_formats() {
        assert_eq!(interview_time("2024-05-01T14:30"), None);
        assert_eq!(interview_time("2024-05-01 14:30"), None);
        assert_eq!(interview_time("2024-05-01 14:30:15"), None);
        assert!(interview_time("tomorrow").is_some());
        assert!(interview_time("2024-13-01 14:30").is_some());
    }
}
