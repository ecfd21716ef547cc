//! # Form credentials
//!
//! [`Credentials`] holds what the user has typed so far. Login only uses
//! `email` and `password`; signup additionally uses `name` and
//! `confirm_password`. [`FormMode`] tells the two forms apart and carries the
//! mode-specific error texts.

use std::fmt;

/// Which form a controller is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    Login,
    Signup,
}

impl FormMode {
    /// Text shown when a required field is empty.
    pub fn missing_field_message(self) -> &'static str {
        match self {
            Self::Login => "Please provide both email and password",
            Self::Signup => "All fields are required",
        }
    }

    /// Text shown when the Google popup or button fails before a token exists.
    pub fn provider_failure_message(self) -> &'static str {
        match self {
            Self::Login => "Google Login Failed",
            Self::Signup => "Google Signup Failed",
        }
    }

    /// Fields the form renders, in display order.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::Login => &[FormField::Email, FormField::Password],
            Self::Signup => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
        }
    }
}

/// A single editable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Values typed into the login or signup form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Credentials {
    /// Credentials for the login form.
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Credentials for the signup form.
    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Passwords stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}
