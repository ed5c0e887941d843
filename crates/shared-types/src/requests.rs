use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use std::collections::HashMap;
#[cfg(feature = "validation")]
use validator::Validate;

/// Format of the `date_of_birth` field, as produced by a date input.
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Credentials for `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Registration profile for `POST auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub employee_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Phone number is required"))
    )]
    pub phone_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Date of birth is required"))
    )]
    pub date_of_birth: String,
}

impl RegisterRequest {
    /// `None` when the date parses (or is empty, which the required check
    /// reports instead), otherwise the field message.
    pub fn date_of_birth_error(&self) -> Option<String> {
        if self.date_of_birth.is_empty() {
            return None;
        }
        match chrono::NaiveDate::parse_from_str(&self.date_of_birth, DATE_OF_BIRTH_FORMAT) {
            Ok(_) => None,
            Err(_) => Some("Date of birth must be a date (YYYY-MM-DD)".to_string()),
        }
    }
}

/// Flatten `validator` errors into one message per field.
#[cfg(feature = "validation")]
pub fn field_errors(errors: &validator::ValidationErrors) -> HashMap<String, String> {
    let mut field_errors = HashMap::new();
    for (field, errs) in errors.field_errors() {
        if let Some(first) = errs.first() {
            let msg = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            field_errors.insert(field.to_string(), msg);
        }
    }
    field_errors
}

#[cfg(feature = "validation")]
impl LoginRequest {
    /// Client-side checks run before submitting. Empty map means valid.
    pub fn form_errors(&self) -> HashMap<String, String> {
        self.validate()
            .err()
            .map(|e| field_errors(&e))
            .unwrap_or_default()
    }
}

#[cfg(feature = "validation")]
impl RegisterRequest {
    /// Client-side checks run before submitting. Empty map means valid.
    pub fn form_errors(&self) -> HashMap<String, String> {
        let mut errors = self
            .validate()
            .err()
            .map(|e| field_errors(&e))
            .unwrap_or_default();
        if let Some(msg) = self.date_of_birth_error() {
            errors.entry("date_of_birth".to_string()).or_insert(msg);
        }
        errors
    }
}
