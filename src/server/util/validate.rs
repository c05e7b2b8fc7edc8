//! Request body validation.
//!
//! DTOs implement [`Validate`] in the server model layer. Checks accumulate in a
//! [`Validator`] so a single response reports every invalid field at once.

use std::fmt::Display;

use crate::server::error::validation::{FieldError, ValidationError};

/// Request payload that can check its own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates field errors across multiple checks.
#[derive(Debug, Default)]
pub struct Validator {
    fields: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field` when `ok` is false.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.fields.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
        self
    }

    /// Value must contain at least one non-whitespace character and at most `max` characters.
    pub fn required(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self.check(field, false, "is required");
        }
        self.check(
            field,
            trimmed.chars().count() <= max,
            &format!("must be at most {} characters", max),
        )
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_email(value), "must be a valid email address")
    }

    /// Optional phone number; absent or blank values pass.
    pub fn phone(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(phone) => self.check(field, is_phone(phone), "must be a valid phone number"),
            None => self,
        }
    }

    /// Value must fall within `min..=max`.
    pub fn range<T: PartialOrd + Display>(
        &mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> &mut Self {
        let message = format!("must be between {} and {}", min, max);
        self.check(field, value >= min && value <= max, &message)
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: std::mem::take(&mut self.fields),
            })
        }
    }
}

/// Loose email shape check: `local@domain.tld` without whitespace.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Phone numbers may use `+`, spaces, dashes, dots and parentheses around 7 to 15 digits.
pub fn is_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);

    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
    {
        return false;
    }

    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

/// Normalizes an email address for storage and lookup.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trims an optional string, mapping blank values to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
