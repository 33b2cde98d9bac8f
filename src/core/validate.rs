//! Boundary validation for profile payloads
//!
//! Create and update bodies are checked here before they touch the store,
//! so a rejected payload never causes a partial mutation. Format checks use
//! cached regexes; range checks enforce the record invariants (non-empty
//! practice areas, rating within [0, 5], positive hourly rate).

use regex::Regex;
use std::sync::OnceLock;

use super::error::{FieldError, ValidationError};
use super::model::{LawyerPatch, NewLawyer};

pub(crate) fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    });
    regex.is_match(email)
}

pub(crate) fn is_valid_url(url: &str) -> bool {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
    regex.is_match(url)
}

pub(crate) fn is_valid_phone(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| {
        // At least 8 digits, max 15 (E.164 standard)
        Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
    });
    regex.is_match(phone)
}

/// Validate a create payload, collecting every failing field.
pub fn validate_new(new: &NewLawyer) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if new.name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be empty"));
    }
    if new.practice_areas.is_empty() {
        errors.push(FieldError::new("practiceAreas", "must not be empty"));
    }
    if new.hourly_rate == 0 {
        errors.push(FieldError::new("hourlyRate", "must be positive"));
    }
    if !(0.0..=5.0).contains(&new.rating) {
        errors.push(FieldError::new("rating", "must be between 0 and 5"));
    }
    if !is_valid_url(&new.profile_image) {
        errors.push(FieldError::new("profileImage", "must be a valid URL"));
    }
    if !is_valid_email(&new.contact_email) {
        errors.push(FieldError::new("contactEmail", "must be a valid email address"));
    }
    if !is_valid_phone(&new.contact_phone) {
        errors.push(FieldError::new("contactPhone", "must be a valid phone number"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}

/// Validate an update payload; only present fields are checked.
pub fn validate_patch(patch: &LawyerPatch) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        errors.push(FieldError::new("name", "must not be empty"));
    }
    if patch.practice_areas.as_deref().is_some_and(<[_]>::is_empty) {
        errors.push(FieldError::new("practiceAreas", "must not be empty"));
    }
    if patch.hourly_rate == Some(0) {
        errors.push(FieldError::new("hourlyRate", "must be positive"));
    }
    if patch
        .rating
        .is_some_and(|rating| !(0.0..=5.0).contains(&rating))
    {
        errors.push(FieldError::new("rating", "must be between 0 and 5"));
    }
    if patch
        .profile_image
        .as_deref()
        .is_some_and(|url| !is_valid_url(url))
    {
        errors.push(FieldError::new("profileImage", "must be a valid URL"));
    }
    if patch
        .contact_email
        .as_deref()
        .is_some_and(|email| !is_valid_email(email))
    {
        errors.push(FieldError::new("contactEmail", "must be a valid email address"));
    }
    if patch
        .contact_phone
        .as_deref()
        .is_some_and(|phone| !is_valid_phone(phone))
    {
        errors.push(FieldError::new("contactPhone", "must be a valid phone number"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
