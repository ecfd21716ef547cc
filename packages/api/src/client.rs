//! # HTTP client for the auth backend
//!
//! [`AuthBackend`] is the seam between the form controller and the network.
//! [`HttpAuthClient`] implements it with `reqwest`, which uses `fetch` when
//! compiled to WASM and hyper elsewhere.
//!
//! ## Response handling
//!
//! Every endpoint goes through [`HttpAuthClient::post_json`]:
//!
//! 1. The `Content-Type` must contain `application/json`. Anything else is
//!    logged with its body and reported as [`AuthError::NonJson`], even when
//!    the status is 2xx.
//! 2. The body is parsed as JSON.
//! 3. A non-2xx status becomes [`AuthError::Rejected`] carrying the body's
//!    `message`, or an endpoint-specific fallback.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AuthError, GENERIC_FAILURE, GOOGLE_AUTH_FAILURE};
use crate::models::{GoogleAuthResponse, GoogleRequest, LoginRequest, SignupRequest};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const GOOGLE_PATH: &str = "/api/auth/google";

/// Backend operations the auth forms need.
pub trait AuthBackend {
    /// `POST /api/auth/login`. The success body is not inspected.
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError>;

    /// `POST /api/auth/signup`. Returns the backend's verification message.
    async fn signup(&self, request: &SignupRequest) -> Result<String, AuthError>;

    /// `POST /api/auth/google`.
    async fn google(&self, request: &GoogleRequest) -> Result<GoogleAuthResponse, AuthError>;
}

/// `reqwest`-backed [`AuthBackend`].
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    /// Create a client resolving endpoint paths against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and return the status with the parsed JSON reply.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, Value), AuthError> {
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        let status = response.status();

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("application/json"));

        if !is_json {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(%status, path, body = %text, "Non-JSON response from auth backend");
            return Err(AuthError::NonJson {
                status: status.as_u16(),
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        Ok((status, data))
    }
}

/// Turn a non-2xx reply into [`AuthError::Rejected`].
fn check_status(status: StatusCode, data: &Value, fallback: &str) -> Result<(), AuthError> {
    if status.is_success() {
        return Ok(());
    }
    let message = message_of(data).unwrap_or(fallback).to_string();
    tracing::warn!(%status, %message, "Auth backend rejected request");
    Err(AuthError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Non-empty `message` string of a JSON body.
fn message_of(data: &Value) -> Option<&str> {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

impl AuthBackend for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let (status, data) = self.post_json(LOGIN_PATH, request).await?;
        check_status(status, &data, GENERIC_FAILURE)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String, AuthError> {
        let (status, data) = self.post_json(SIGNUP_PATH, request).await?;
        check_status(status, &data, GENERIC_FAILURE)?;
        Ok(message_of(&data).unwrap_or_default().to_string())
    }

    async fn google(&self, request: &GoogleRequest) -> Result<GoogleAuthResponse, AuthError> {
        let (status, data) = self.post_json(GOOGLE_PATH, request).await?;
        check_status(status, &data, GOOGLE_AUTH_FAILURE)?;
        serde_json::from_value(data).map_err(|e| AuthError::Decode(e.to_string()))
    }
}
