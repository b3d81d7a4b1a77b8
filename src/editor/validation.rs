//! Field validation and the save gate
//!
//! Validators are pure: the same value always yields the same verdict. The
//! editor decides *when* they run (full pass on save, never while typing).

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::constants::{limits, social};
use crate::editor::profile::Profile;

/// Fields that carry validation rules, used as error keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidatedField {
    DisplayName,
    Age,
    Location,
    AboutMe,
    CoreValues,
    SocialLinks,
}

impl ValidatedField {
    pub const ALL: [ValidatedField; 6] = [
        ValidatedField::DisplayName,
        ValidatedField::Age,
        ValidatedField::Location,
        ValidatedField::AboutMe,
        ValidatedField::CoreValues,
        ValidatedField::SocialLinks,
    ];

    /// Key as it appears in the serialized profile
    pub fn key(self) -> &'static str {
        match self {
            ValidatedField::DisplayName => "displayName",
            ValidatedField::Age => "age",
            ValidatedField::Location => "location",
            ValidatedField::AboutMe => "aboutMe",
            ValidatedField::CoreValues => "coreValues",
            ValidatedField::SocialLinks => "socialLinks",
        }
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inline message for a field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Display name is required")]
    DisplayNameRequired,
    #[error("Display name must be at least {} characters", limits::DISPLAY_NAME_MIN)]
    DisplayNameTooShort,
    #[error("Display name must be less than {} characters", limits::DISPLAY_NAME_MAX)]
    DisplayNameTooLong,
    #[error("Age is required")]
    AgeRequired,
    #[error("Age must be a number")]
    AgeNotANumber,
    #[error("Age must be between {} and {}", limits::AGE_MIN, limits::AGE_MAX)]
    AgeOutOfRange,
    #[error("Location is required")]
    LocationRequired,
    #[error("About Me must be less than {} characters", limits::ABOUT_ME_MAX)]
    AboutMeTooLong,
    #[error("Maximum {} core values allowed", limits::CORE_VALUES_MAX)]
    TooManyCoreValues,
    #[error("Social links must start with {}", social::HANDLE_PREFIX)]
    SocialLinkMissingHandle,
}

pub fn validate_display_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        return Some(FieldError::DisplayNameRequired);
    }
    let len = name.chars().count();
    if len < limits::DISPLAY_NAME_MIN {
        return Some(FieldError::DisplayNameTooShort);
    }
    if len > limits::DISPLAY_NAME_MAX {
        return Some(FieldError::DisplayNameTooLong);
    }
    None
}

pub fn validate_age(age: &str) -> Option<FieldError> {
    if age.trim().is_empty() {
        return Some(FieldError::AgeRequired);
    }
    match leading_integer(age) {
        LeadingInt::Missing => Some(FieldError::AgeNotANumber),
        LeadingInt::Overflow => Some(FieldError::AgeOutOfRange),
        LeadingInt::Value(value) if !(limits::AGE_MIN..=limits::AGE_MAX).contains(&value) => {
            Some(FieldError::AgeOutOfRange)
        }
        LeadingInt::Value(_) => None,
    }
}

pub fn validate_location(location: &str) -> Option<FieldError> {
    location
        .trim()
        .is_empty()
        .then_some(FieldError::LocationRequired)
}

pub fn validate_about_me(about: &str) -> Option<FieldError> {
    (about.chars().count() > limits::ABOUT_ME_MAX).then_some(FieldError::AboutMeTooLong)
}

pub fn validate_core_values(values: &[String]) -> Option<FieldError> {
    (values.len() > limits::CORE_VALUES_MAX).then_some(FieldError::TooManyCoreValues)
}

/// Empty entries are tolerated; any other entry needs the handle prefix
pub fn validate_social_links(links: &[String]) -> Option<FieldError> {
    links
        .iter()
        .any(|link| !link.is_empty() && !link.starts_with(social::HANDLE_PREFIX))
        .then_some(FieldError::SocialLinkMissingHandle)
}

/// Run every validator against `profile`
pub fn validate_all(profile: &Profile) -> ValidationErrors {
    let checks = [
        (ValidatedField::DisplayName, validate_display_name(&profile.display_name)),
        (ValidatedField::Age, validate_age(&profile.age)),
        (ValidatedField::Location, validate_location(&profile.location)),
        (ValidatedField::AboutMe, validate_about_me(&profile.about_me)),
        (ValidatedField::CoreValues, validate_core_values(&profile.core_values)),
        (ValidatedField::SocialLinks, validate_social_links(profile.social_links.as_slice())),
    ];

    let mut errors = ValidationErrors::default();
    for (field, error) in checks {
        if let Some(error) = error {
            errors.insert(field, error);
        }
    }
    errors
}

/// Per-field error mapping; a missing entry means the field is fine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<ValidatedField, FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: ValidatedField) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    /// Inline message for `field`, if it has an error
    pub fn message(&self, field: ValidatedField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn insert(&mut self, field: ValidatedField, error: FieldError) {
        self.entries.insert(field, error);
    }

    /// Drop the entry for `field`; returns whether one was present
    pub fn clear(&mut self, field: ValidatedField) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValidatedField, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    /// Save gate: true iff no field holds an error
    pub fn can_save(&self) -> bool {
        self.entries.is_empty()
    }
}

enum LeadingInt {
    Value(i64),
    Overflow,
    Missing,
}

/// Integer formed by the leading digits, after optional whitespace and sign
fn leading_integer(text: &str) -> LeadingInt {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return LeadingInt::Missing;
    }
    match rest[..digit_count].parse::<i64>() {
        Ok(value) if negative => LeadingInt::Value(-value),
        Ok(value) => LeadingInt::Value(value),
        Err(_) => LeadingInt::Overflow,
    }
}
