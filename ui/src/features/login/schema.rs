//! Declarative checks for the login form.
//!
//! [`validate`] maps a draft to either the coerced [`LoginFormData`] or the
//! set of per-field messages, independent of any rendering.

use tracing::{debug, trace};

use super::errors::{FieldErrors, FieldPath};
use super::types::*;
use crate::utils::validation::is_email;

pub const NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const MIN_AGE: f64 = 18.0;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_TOO_LOW: &str = "Must be at least 18";
pub const DEPARTMENT_REQUIRED: &str = "Department is required";
pub const GENDER_REQUIRED: &str = "Expected 'male' | 'female', received null";
pub const TERMS_REQUIRED: &str = "You must accept the terms";
pub const STREET_REQUIRED: &str = "Street is required";
pub const CITY_REQUIRED: &str = "City is required";
pub const SKILL_REQUIRED: &str = "Skill is required";

// Lengths are measured in UTF-16 code units, as a browser input reports them
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Coerces the raw number input. Empty or non-numeric text yields `None`.
pub fn parse_age(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|age| age.is_finite())
}

fn check_min_len(
    errors: &mut FieldErrors,
    path: &str,
    value: &str,
    min: usize,
    message: &str,
) {
    if text_len(value) < min {
        errors.insert(path, message);
    }
}

/// Validates the whole draft, collecting the first violated rule per field.
pub fn validate(draft: &LoginFormDraft) -> Result<LoginFormData, FieldErrors> {
    let mut errors = FieldErrors::new();

    check_min_len(&mut errors, "name", &draft.name, NAME_MIN_LEN, NAME_TOO_SHORT);

    if !is_email(&draft.email) {
        errors.insert("email", EMAIL_INVALID);
    }

    check_min_len(
        &mut errors,
        "password",
        &draft.password,
        PASSWORD_MIN_LEN,
        PASSWORD_TOO_SHORT,
    );

    let age = parse_age(&draft.age);
    match age {
        None => errors.insert("age", AGE_REQUIRED),
        Some(age) if age < MIN_AGE => errors.insert("age", AGE_TOO_LOW),
        Some(_) => {}
    }

    let department = draft.department.parse::<Department>().ok();
    if department.is_none() {
        errors.insert("department", DEPARTMENT_REQUIRED);
    }

    if draft.gender.is_none() {
        errors.insert("gender", GENDER_REQUIRED);
    }

    if !draft.agree_to_terms {
        errors.insert("agreeToTerms", TERMS_REQUIRED);
    }

    check_min_len(&mut errors, "address.street", &draft.address.street, 1, STREET_REQUIRED);
    check_min_len(&mut errors, "address.city", &draft.address.city, 1, CITY_REQUIRED);

    for (index, skill) in draft.skills.iter().enumerate() {
        if skill.name.is_empty() {
            errors.insert(FieldPath::skill_name(index), SKILL_REQUIRED);
        }
    }

    match (age, department, draft.gender) {
        (Some(age), Some(department), Some(gender)) if errors.is_empty() => {
            trace!("draft passed validation");
            Ok(LoginFormData {
                name: draft.name.clone(),
                email: draft.email.clone(),
                password: draft.password.clone(),
                age,
                department,
                gender,
                agree_to_terms: true,
                address: draft.address.clone(),
                skills: draft
                    .skills
                    .iter()
                    .map(|skill| Skill {
                        name: skill.name.clone(),
                    })
                    .collect(),
            })
        }
        _ => {
            debug!(failed = errors.len(), "draft failed validation");
            Err(errors)
        }
    }
}
