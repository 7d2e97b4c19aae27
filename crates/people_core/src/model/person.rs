//! Person domain model and field validation.
//!
//! # Responsibility
//! - Define the canonical 11-field person record and its list projection.
//! - Own the required-field rule set used by every write path caller.
//!
//! # Invariants
//! - Field order is `id, first_name, last_name, email, job_title, street,
//!   street2, city, state, postal, notes` everywhere a record is serialized.
//! - Validation is pure and short-circuits on the first violated rule.
//! - `street2` and `notes` never take part in validation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key. Monotonic and never reused.
pub type PersonId = i64;

/// USPS abbreviations accepted for `state`: the 50 states plus DC.
pub const USPS_STATE_CODES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// Returns whether `code` is one of the USPS abbreviations, compared as given.
pub fn is_usps_state_code(code: &str) -> bool {
    USPS_STATE_CODES.contains(&code)
}

/// Every person attribute except `id`; the input shape for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    /// Required by validation but stored nullable.
    pub email: Option<String>,
    pub job_title: String,
    pub street: String,
    /// Suite, apartment or unit.
    pub street2: Option<String>,
    pub city: String,
    /// Two-letter USPS abbreviation.
    pub state: String,
    /// Any non-blank text; no format check.
    pub postal: String,
    pub notes: Option<String>,
}

/// Full stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(flatten)]
    pub fields: PersonFields,
}

/// Lightweight list projection: `(id, first_name, last_name, email)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// First violated required-field rule.
///
/// `Display` yields the exact user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    MissingFirstName,
    MissingLastName,
    MissingEmail,
    MissingJobTitle,
    MissingStreet,
    MissingCity,
    InvalidState,
    MissingPostal,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::MissingFirstName => "First name is required",
            Self::MissingLastName => "Last name is required",
            Self::MissingEmail => "Email is required",
            Self::MissingJobTitle => "Job title is required",
            Self::MissingStreet => "Street address is required",
            Self::MissingCity => "City is required",
            Self::InvalidState => "Please enter a valid USPS state abbreviation",
            Self::MissingPostal => "Please enter a postal/zip code",
        };
        f.write_str(message)
    }
}

impl Error for PersonValidationError {}

/// `(is_valid, message)` pair handed to presentation code.
///
/// `message` is empty exactly when `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(error: PersonValidationError) -> Self {
        Self {
            is_valid: false,
            message: error.to_string(),
        }
    }
}

impl From<Result<(), PersonValidationError>> for ValidationOutcome {
    fn from(value: Result<(), PersonValidationError>) -> Self {
        match value {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err),
        }
    }
}

impl PersonFields {
    /// Checks required fields in fixed order; the first failure wins.
    ///
    /// Blank means empty after trimming. `state` must additionally match a
    /// USPS code exactly, without trimming or case folding.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if is_blank(&self.first_name) {
            return Err(PersonValidationError::MissingFirstName);
        }
        if is_blank(&self.last_name) {
            return Err(PersonValidationError::MissingLastName);
        }
        if self.email.as_deref().map_or(true, is_blank) {
            return Err(PersonValidationError::MissingEmail);
        }
        if is_blank(&self.job_title) {
            return Err(PersonValidationError::MissingJobTitle);
        }
        if is_blank(&self.street) {
            return Err(PersonValidationError::MissingStreet);
        }
        if is_blank(&self.city) {
            return Err(PersonValidationError::MissingCity);
        }
        if is_blank(&self.state) || !is_usps_state_code(&self.state) {
            return Err(PersonValidationError::InvalidState);
        }
        if is_blank(&self.postal) {
            return Err(PersonValidationError::MissingPostal);
        }
        Ok(())
    }
}

/// Validates candidate fields into the `(is_valid, message)` shape.
pub fn validate(fields: &PersonFields) -> ValidationOutcome {
    fields.validate().into()
}

impl Person {
    /// Summary projection of this record, as returned by listing.
    pub fn summary(&self) -> PersonSummary {
        PersonSummary {
            id: self.id,
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            email: self.fields.email.clone(),
        }
    }

    /// Multi-line detail block for read-only display.
    pub fn detail_text(&self) -> String {
        let fields = &self.fields;
        format!(
            "ID: {}\n\
             First Name: {}\n\
             Last Name: {}\n\
             Email: {}\n\
             Job Title: {}\n\
             Street Address: {}\n\
             Street Address 2: {}\n\
             City: {}\n\
             State: {}\n\
             Postal Code: {}\n\
             \n\
             Notes:\n\
             {}",
            self.id,
            fields.first_name,
            fields.last_name,
            fields.email.as_deref().unwrap_or(""),
            fields.job_title,
            fields.street,
            present_or(fields.street2.as_deref(), "(not provided)"),
            fields.city,
            fields.state,
            fields.postal,
            present_or(fields.notes.as_deref(), "(no notes)"),
        )
    }
}

impl Display for PersonSummary {
    /// List line: `{id} - {first} {last} ({email})`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} {} ({})",
            self.id,
            self.first_name,
            self.last_name,
            present_or(self.email.as_deref(), "no email")
        )
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}
