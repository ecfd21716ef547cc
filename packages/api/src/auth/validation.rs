//! # Client-side credential validation
//!
//! Runs before any request is sent. The first failing check wins and becomes
//! the form's single error message.
//!
//! - Login: both fields present, then a well-formed email.
//! - Signup: all four fields present, password of at least
//!   [`MIN_PASSWORD_LEN`] characters, matching confirmation, then a
//!   well-formed email.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Credentials, FormMode};

/// Minimum signup password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A credential check that failed before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.missing_field_message())]
    MissingField(FormMode),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate credentials according to the form's rules.
pub fn validate(mode: FormMode, creds: &Credentials) -> Result<(), ValidationError> {
    match mode {
        FormMode::Login => validate_login(creds),
        FormMode::Signup => validate_signup(creds),
    }
}

pub fn validate_login(creds: &Credentials) -> Result<(), ValidationError> {
    if creds.email.is_empty() || creds.password.is_empty() {
        return Err(ValidationError::MissingField(FormMode::Login));
    }
    if !is_valid_email(&creds.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_signup(creds: &Credentials) -> Result<(), ValidationError> {
    if creds.name.is_empty()
        || creds.email.is_empty()
        || creds.password.is_empty()
        || creds.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingField(FormMode::Signup));
    }
    if creds.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::WeakPassword);
    }
    if creds.password != creds.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(&creds.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
