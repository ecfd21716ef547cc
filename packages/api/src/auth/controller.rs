//! # Auth form controller
//!
//! One controller drives one form (login or signup). It owns the typed
//! credentials and the submission phase:
//!
//! ```text
//! Idle ──begin──▶ Submitting ──finish──▶ Success(outcome)
//!   ▲                                 └─▶ Failed(message)
//!   └──────────── edit ───────────────────────┘
//! ```
//!
//! Submitting is split in two synchronous halves so a UI can keep the
//! controller in a reactive cell without holding a borrow across the network
//! call:
//!
//! - [`begin_password`](AuthFormController::begin_password) /
//!   [`begin_oauth`](AuthFormController::begin_oauth) validate, enter
//!   `Submitting` and hand back a [`Submission`];
//! - [`Submission::send`] performs the request against an [`AuthBackend`];
//! - [`finish`](AuthFormController::finish) records the result and always
//!   leaves `Submitting`.
//!
//! [`submit_password`](AuthFormController::submit_password) and
//! [`submit_oauth`](AuthFormController::submit_oauth) chain the three for
//! callers that can hold `&mut self` across an `.await`.

use super::google::OAuthToken;
use super::session::SessionOutcome;
use super::validation::validate;
use crate::client::AuthBackend;
use crate::error::AuthError;
use crate::models::{Credentials, FormField, FormMode, GoogleRequest, LoginRequest, SignupRequest};

/// Shown after signup when the backend sends no verification text.
pub const VERIFY_EMAIL_FALLBACK: &str = "Account created. Please check your email to verify your account.";

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success(SessionOutcome),
    Failed(String),
}

/// A validated request, ready to go over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Login(LoginRequest),
    Signup(SignupRequest),
    Google(GoogleRequest),
}

impl Submission {
    /// Perform the request and interpret the reply.
    pub async fn send<B: AuthBackend>(&self, backend: &B) -> Result<SessionOutcome, AuthError> {
        match self {
            Self::Login(request) => backend
                .login(request)
                .await
                .map(|()| SessionOutcome::Authenticated),
            Self::Signup(request) => backend.signup(request).await.map(|message| {
                let message = if message.is_empty() {
                    VERIFY_EMAIL_FALLBACK.to_string()
                } else {
                    message
                };
                SessionOutcome::PendingVerification { message }
            }),
            Self::Google(request) => backend
                .google(request)
                .await
                .map(|response| SessionOutcome::from_google(&response)),
        }
    }
}

/// State of a single login or signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormController {
    mode: FormMode,
    credentials: Credentials,
    phase: Phase,
}

impl AuthFormController {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            credentials: Credentials::default(),
            phase: Phase::Idle,
        }
    }

    pub fn login() -> Self {
        Self::new(FormMode::Login)
    }

    pub fn signup() -> Self {
        Self::new(FormMode::Signup)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True while a request is in flight; the submit control is disabled.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The single error message currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        match &self.phase {
            Phase::Success(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Verification text after a successful signup.
    pub fn success_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Success(SessionOutcome::PendingVerification { message }) => Some(message),
            _ => None,
        }
    }

    /// Update one field. Any error on screen is cleared.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.credentials.set(field, value.into());
        if matches!(self.phase, Phase::Failed(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// Validate the typed credentials and enter `Submitting`.
    ///
    /// On a validation failure the form moves to `Failed` and no
    /// [`Submission`] is produced, so nothing reaches the network.
    pub fn begin_password(&mut self) -> Result<Submission, AuthError> {
        self.ensure_idle()?;
        self.phase = Phase::Idle;

        if let Err(err) = validate(self.mode, &self.credentials) {
            self.phase = Phase::Failed(err.to_string());
            return Err(err.into());
        }

        self.phase = Phase::Submitting;
        Ok(match self.mode {
            FormMode::Login => Submission::Login(LoginRequest::from(&self.credentials)),
            FormMode::Signup => Submission::Signup(SignupRequest::from(&self.credentials)),
        })
    }

    /// Enter `Submitting` for a token handed over by Google.
    pub fn begin_oauth(&mut self, token: OAuthToken) -> Result<Submission, AuthError> {
        self.ensure_idle()?;
        if token.is_empty() {
            self.provider_failed();
            return Err(AuthError::Provider(
                self.mode.provider_failure_message().to_string(),
            ));
        }
        self.phase = Phase::Submitting;
        Ok(Submission::Google(token.into_request()))
    }

    /// Record the result of a [`Submission`] and leave `Submitting`.
    pub fn finish(
        &mut self,
        result: Result<SessionOutcome, AuthError>,
    ) -> Result<SessionOutcome, AuthError> {
        match &result {
            Ok(outcome) => {
                if matches!(outcome, SessionOutcome::PendingVerification { .. }) {
                    self.credentials.clear();
                }
                tracing::info!(mode = ?self.mode, ?outcome, "Auth submission succeeded");
                self.phase = Phase::Success(outcome.clone());
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, error = %err, "Auth submission failed");
                self.phase = Phase::Failed(err.to_string());
            }
        }
        result
    }

    /// The Google button or popup failed before producing a token.
    pub fn provider_failed(&mut self) {
        if self.is_loading() {
            return;
        }
        let message = self.mode.provider_failure_message();
        tracing::warn!(mode = ?self.mode, "{message}");
        self.phase = Phase::Failed(message.to_string());
    }

    /// Validate, send and record a password submission.
    pub async fn submit_password<B: AuthBackend>(
        &mut self,
        backend: &B,
    ) -> Result<SessionOutcome, AuthError> {
        let submission = self.begin_password()?;
        let result = submission.send(backend).await;
        self.finish(result)
    }

    /// Forward a Google token and record the result.
    pub async fn submit_oauth<B: AuthBackend>(
        &mut self,
        backend: &B,
        token: OAuthToken,
    ) -> Result<SessionOutcome, AuthError> {
        let submission = self.begin_oauth(token)?;
        let result = submission.send(backend).await;
        self.finish(result)
    }

    fn ensure_idle(&self) -> Result<(), AuthError> {
        if self.is_loading() {
            tracing::debug!(mode = ?self.mode, "Ignoring submit while a request is in flight");
            return Err(AuthError::InFlight);
        }
        Ok(())
    }
}
