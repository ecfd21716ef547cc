//! # Google sign-in tokens
//!
//! Google Identity Services hands the browser one of two things:
//!
//! - an **ID token** (`credential`) from the rendered "Continue with Google"
//!   button, used on the login page;
//! - an **access token** from the popup token client, used on the signup page.
//!
//! Both are opaque here and are forwarded unchanged to `POST /api/auth/google`,
//! which verifies them and decides whether the account still needs a password.

use std::fmt;

use crate::models::GoogleRequest;

/// Token obtained from Google, ready to forward to the backend.
#[derive(Clone, PartialEq, Eq)]
pub enum OAuthToken {
    Credential(String),
    AccessToken(String),
}

impl OAuthToken {
    pub fn into_request(self) -> GoogleRequest {
        match self {
            Self::Credential(credential) => GoogleRequest::Credential { credential },
            Self::AccessToken(access_token) => GoogleRequest::AccessToken { access_token },
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Credential(t) | Self::AccessToken(t) => t.is_empty(),
        }
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential(_) => f.write_str("OAuthToken::Credential(***)"),
            Self::AccessToken(_) => f.write_str("OAuthToken::AccessToken(***)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request() {
        assert_eq!(
            OAuthToken::Credential("jwt".to_string()).into_request(),
            GoogleRequest::Credential {
                credential: "jwt".to_string()
            }
        );
        assert_eq!(
            OAuthToken::AccessToken("ya29".to_string()).into_request(),
            GoogleRequest::AccessToken {
                access_token: "ya29".to_string()
            }
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = OAuthToken::Credential("jwt.payload.sig".to_string());
        assert_eq!(format!("{token:?}"), "OAuthToken::Credential(***)");
    }
}
