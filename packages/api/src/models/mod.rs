//! Form and wire models for the auth flow.

mod credentials;
mod wire;

pub use credentials::{Credentials, FormField, FormMode};
pub use wire::{GoogleAuthResponse, GoogleRequest, LoginRequest, SignupRequest};
