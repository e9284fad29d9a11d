//! Validation rules exercised through the public `form` API.

use jobform::form::{validate, validate_field, validate_live, Field, FormValues, Position, Skill};

/// Values that pass every rule for a developer.
fn valid_developer() -> FormValues {
    let mut values = FormValues {
        full_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone_number: "+12345678901".into(),
        applying_for_position: Some(Position::Developer),
        relevant_experience: "3".into(),
        preferred_interview_time: "2024-05-01T14:30".into(),
        ..FormValues::default()
    };
    values.set_skill(Skill::JavaScript, true);
    values
}

#[test]
fn valid_developer_has_no_errors() {
    assert!(validate(&valid_developer()).is_empty());
}

#[test]
fn empty_form_reports_every_unconditional_field() {
    let errors = validate(&FormValues::default());
    let fields: Vec<Field> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            Field::FullName,
            Field::Email,
            Field::PhoneNumber,
            Field::ApplyingForPosition,
            Field::AdditionalSkills,
            Field::PreferredInterviewTime,
        ]
    );
    assert_eq!(errors.get(Field::FullName), Some("Full Name is required"));
    assert_eq!(
        errors.get(Field::AdditionalSkills),
        Some("At least one Additional Skill must be selected")
    );
}

#[test]
fn short_full_names_always_error() {
    for name in ["a", "ab", "abc", "abcd", "Jo B"] {
        let values = FormValues {
            full_name: name.into(),
            ..valid_developer()
        };
        assert!(
            validate(&values).get(Field::FullName).is_some(),
            "expected error for {name:?}"
        );
    }
}

#[test]
fn digits_in_full_name_always_error() {
    for name in ["R2D2 the droid", "Grace Hopper 3", "1 Grace Hopper", "12345"] {
        let values = FormValues {
            full_name: name.into(),
            ..valid_developer()
        };
        assert!(
            validate(&values).get(Field::FullName).is_some(),
            "expected error for {name:?}"
        );
    }
}

#[test]
fn phone_rules() {
    let check = |phone: &str| {
        let values = FormValues {
            phone_number: phone.into(),
            ..valid_developer()
        };
        validate_field(Field::PhoneNumber, &values)
    };

    assert_eq!(
        check("12345678901").as_deref(),
        Some("Phone Number must start with a country code (+)")
    );
    assert_eq!(check("+12345678901"), None);
    assert_eq!(
        check("+123456789").as_deref(),
        Some("Phone Number must be in the format +CountrycodePhonenumber (e.g., +1234567890)")
    );
}

#[test]
fn developer_experience_must_be_positive_number() {
    for (experience, ok) in [
        ("0", false),
        ("abc", false),
        ("", false),
        ("inf", false),
        ("Infinity", false),
        ("3", true),
    ] {
        let values = FormValues {
            relevant_experience: experience.into(),
            ..valid_developer()
        };
        assert_eq!(
            validate(&values).get(Field::RelevantExperience).is_none(),
            ok,
            "experience {experience:?}"
        );
    }
}

#[test]
fn experience_is_ignored_for_managers() {
    let values = FormValues {
        applying_for_position: Some(Position::Manager),
        relevant_experience: "not a number".into(),
        management_experience: "Led a team of 5".into(),
        ..valid_developer()
    };
    assert!(validate(&values).is_empty());
}

#[test]
fn designer_portfolio_url() {
    let designer = |url: &str| FormValues {
        applying_for_position: Some(Position::Designer),
        portfolio_url: url.into(),
        ..valid_developer()
    };

    assert_eq!(
        validate(&designer("")).get(Field::PortfolioUrl),
        Some("Portfolio URL is required")
    );
    assert_eq!(validate(&designer("https://example.com")).get(Field::PortfolioUrl), None);
    assert_eq!(
        validate(&designer("not a url")).get(Field::PortfolioUrl),
        Some("Portfolio URL is not a valid URL")
    );
}

#[test]
fn designer_also_needs_experience() {
    let values = FormValues {
        applying_for_position: Some(Position::Designer),
        portfolio_url: "https://example.com".into(),
        relevant_experience: String::new(),
        ..valid_developer()
    };
    assert_eq!(
        validate(&values).get(Field::RelevantExperience),
        Some("Relevant Experience is required")
    );
}

#[test]
fn manager_needs_management_experience() {
    let values = FormValues {
        applying_for_position: Some(Position::Manager),
        ..valid_developer()
    };
    assert_eq!(
        validate(&values).get(Field::ManagementExperience),
        Some("Management Experience is required")
    );
}

#[test]
fn portfolio_is_ignored_for_developers() {
    let values = FormValues {
        portfolio_url: "not a url".into(),
        ..valid_developer()
    };
    assert!(validate(&values).get(Field::PortfolioUrl).is_none());
}

#[test]
fn any_single_skill_clears_skill_error() {
    let mut values = valid_developer();
    values.set_skill(Skill::JavaScript, false);
    assert!(validate(&values).contains(Field::AdditionalSkills));

    for skill in Skill::ALL {
        let mut values = values.clone();
        values.set_skill(skill, true);
        assert!(!validate(&values).contains(Field::AdditionalSkills));
    }
}

#[test]
fn email_must_look_like_an_address() {
    let values = FormValues {
        email: "grace.example.com".into(),
        ..valid_developer()
    };
    assert_eq!(
        validate(&values).get(Field::Email),
        Some("Email address is invalid")
    );
}

#[test]
fn live_pass_only_covers_name_and_phone() {
    let values = FormValues::default();
    assert_eq!(
        validate_live(Field::FullName, &values),
        Some(Some("Full Name is required".to_string()))
    );
    assert!(validate_live(Field::PhoneNumber, &values).is_some());
    assert_eq!(validate_live(Field::Email, &values), None);
    assert_eq!(validate_live(Field::AdditionalSkills, &values), None);
}

#[test]
fn live_pass_matches_full_pass() {
    let values = FormValues {
        full_name: "Ann".into(),
        phone_number: "+1".into(),
        ..FormValues::default()
    };
    let full = validate(&values);
    for field in [Field::FullName, Field::PhoneNumber] {
        assert_eq!(
            validate_live(field, &values).flatten().as_deref(),
            full.get(field)
        );
    }
}
