//! # API crate: client side of the Salvus auth flow
//!
//! Everything the login and signup pages do besides rendering lives here, so
//! it can be tested on the host without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Credential validation, Google tokens, session outcomes and the [`AuthFormController`] state machine |
//! | [`client`] | The [`AuthBackend`] trait and its `reqwest` implementation [`HttpAuthClient`] |
//! | [`config`] | [`Settings`]: API origin, redirect routes and Google client id |
//! | [`error`] | [`AuthError`], whose `Display` is the text shown to the user |
//! | [`models`] | Form credentials and the JSON bodies of `/api/auth/*` |
//!
//! ## Flow
//!
//! 1. Each keystroke calls [`AuthFormController::edit`], which clears any error.
//! 2. Submitting validates locally; failures never reach the network.
//! 3. A valid submission is posted to the backend through an [`AuthBackend`].
//! 4. The reply becomes a [`SessionOutcome`]; [`SessionOutcome::redirect`]
//!    picks the dashboard, the set-password page, or no navigation (signup
//!    waiting for email verification).

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{AuthFormController, OAuthToken, Phase, SessionOutcome, Submission};
pub use client::{AuthBackend, HttpAuthClient};
pub use config::{Routes, Settings};
pub use error::AuthError;
pub use models::{Credentials, FormField, FormMode};
