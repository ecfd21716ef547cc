//! # Request and response bodies for `/api/auth/*`
//!
//! | Endpoint | Request | Success body |
//! |----------|---------|--------------|
//! | `POST /api/auth/login` | [`LoginRequest`] | opaque JSON |
//! | `POST /api/auth/signup` | [`SignupRequest`] | `{ message }` |
//! | `POST /api/auth/google` | [`GoogleRequest`] | [`GoogleAuthResponse`] |
//!
//! Error bodies on every endpoint are `{ message }`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::Credentials;

/// Body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(creds: &Credentials) -> Self {
        Self {
            email: creds.email.clone(),
            password: creds.password.clone(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /api/auth/signup`. The confirmation field never leaves the client.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for SignupRequest {
    fn from(creds: &Credentials) -> Self {
        Self {
            name: creds.name.clone(),
            email: creds.email.clone(),
            password: creds.password.clone(),
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /api/auth/google`: `{ credential }` or `{ access_token }`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GoogleRequest {
    Credential { credential: String },
    AccessToken { access_token: String },
}

impl fmt::Debug for GoogleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential { .. } => f.write_str("GoogleRequest::Credential"),
            Self::AccessToken { .. } => f.write_str("GoogleRequest::AccessToken"),
        }
    }
}

/// Success body of `POST /api/auth/google`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthResponse {
    /// Federated account without a local password yet. Absent or `null` means `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub needs_password_setup: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
