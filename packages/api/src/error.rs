//! # Error type for the auth flow
//!
//! Every failure the login and signup forms can run into collapses into one
//! [`AuthError`]. Its `Display` output is the exact text shown to the user in
//! the form's error banner, so the UI never formats errors itself.

use thiserror::Error;

use crate::auth::ValidationError;

/// Fallback text when a password endpoint rejects a request without a message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Fallback text when the Google endpoint rejects a request without a message.
pub const GOOGLE_AUTH_FAILURE: &str = "Google Auth Failed";

/// Errors surfaced by validation, the HTTP client and the identity provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client-side validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission is already in flight.
    #[error("A request is already in progress")]
    InFlight,

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The backend answered with something other than `application/json`.
    #[error("Server returned an error (check logs)")]
    NonJson { status: u16 },

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The body claimed to be JSON but could not be parsed.
    #[error("{0}")]
    Decode(String),

    /// The identity provider popup or button reported a failure.
    #[error("{0}")]
    Provider(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl AuthError {
    /// Whether this error was raised before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InFlight | Self::Provider(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormMode;

    #[test]
    fn test_display_is_user_facing_text() {
        assert_eq!(
            AuthError::NonJson { status: 502 }.to_string(),
            "Server returned an error (check logs)"
        );
        assert_eq!(
            AuthError::Rejected {
                status: 401,
                message: "Invalid credentials".to_string()
            }
            .to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            AuthError::from(ValidationError::MissingField(FormMode::Login)).to_string(),
            "Please provide both email and password"
        );
    }

    #[test]
    fn test_is_local() {
        assert!(AuthError::InFlight.is_local());
        assert!(AuthError::Validation(ValidationError::InvalidEmail).is_local());
        assert!(!AuthError::Network("offline".to_string()).is_local());
        assert!(!AuthError::NonJson { status: 200 }.is_local());
    }
}
