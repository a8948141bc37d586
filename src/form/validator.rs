use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{
    FieldId,
    FormFields,
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile pattern"));

/// Length is counted in UTF-16 code units, matching what browsers report for
/// an input's value.
pub fn is_valid_name(value: &str) -> bool {
    value.trim().encode_utf16().count() >= 2
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value.trim())
}

/// Pure check against the field's current value.
pub fn check(fields: &FormFields, field: FieldId) -> bool {
    match field {
        FieldId::Name => is_valid_name(&fields.name),
        FieldId::Email => is_valid_email(&fields.email),
        FieldId::Mobile => is_valid_mobile(&fields.mobile),
        FieldId::Terms => fields.terms,
    }
}

/// Checks the field and writes the outcome onto its annotation.
pub fn validate(fields: &mut FormFields, field: FieldId) -> bool {
    let is_valid = check(fields, field);
    let annotation = fields.annotation_mut(field);

    if is_valid {
        annotation.mark_success();
    } else {
        annotation.mark_error(field.spec().error_message);
    }

    is_valid
}

/// Validates every field, annotating all of them even after the first failure.
pub fn validate_all(fields: &mut FormFields) -> bool {
    FieldId::ALL.iter().fold(true, |all_valid, &field| validate(fields, field) && all_valid)
}
