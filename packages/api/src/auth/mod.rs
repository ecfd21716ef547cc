//! Authentication flow: validation, Google tokens, session outcomes and the form controller.

mod controller;
mod google;
mod session;
mod validation;

pub use controller::{AuthFormController, Phase, Submission, VERIFY_EMAIL_FALLBACK};
pub use google::OAuthToken;
pub use session::SessionOutcome;
pub use validation::{
    is_valid_email, validate, validate_login, validate_signup, ValidationError, MIN_PASSWORD_LEN,
};
