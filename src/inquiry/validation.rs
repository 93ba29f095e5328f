//! Field validation for the inquiry form.
//!
//! Validation is pure: it never fails and never mutates, it only reports a
//! message for every field that does not pass.

use super::{InquiryField, InquiryForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Minimum number of trimmed characters required in the requirements field.
///
pub const MIN_REQUIREMENTS_CHARS: usize = 30;

/// Mapping from field to the message shown next to it.
///
pub type FieldErrorMap = BTreeMap<InquiryField, String>;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Shape check only: something@something.something without whitespace.
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Return the error message for a single field, if it fails its rule.
///
pub fn validate_field(form: &InquiryForm, field: InquiryField) -> Option<&'static str> {
    match field {
        InquiryField::Name if form.name.trim().is_empty() => Some("Please tell us your name."),
        InquiryField::Email if form.email.trim().is_empty() => Some("Email is required."),
        InquiryField::Email if !email_pattern().is_match(&form.email) => {
            Some("Enter a valid email address.")
        }
        InquiryField::ProjectType if form.project_type.is_none() => {
            Some("Select a project type.")
        }
        InquiryField::Budget if form.budget.is_none() => Some("Select an estimated budget."),
        InquiryField::Timeline if form.timeline.is_none() => Some("Select a timeline."),
        InquiryField::Requirements
            if form.requirements.trim().chars().count() < MIN_REQUIREMENTS_CHARS =>
        {
            Some("Please provide at least 30 characters of detail.")
        }
        _ => None,
    }
}

/// Validate every field of the form.
///
pub fn validate(form: &InquiryForm) -> FieldErrorMap {
    InquiryField::ALL
        .iter()
        .filter_map(|field| {
            validate_field(form, *field).map(|message| (*field, message.to_string()))
        })
        .collect()
}

/// Whether the form passes every validator.
///
pub fn is_submittable(form: &InquiryForm) -> bool {
    InquiryField::ALL
        .iter()
        .all(|field| validate_field(form, *field).is_none())
}
