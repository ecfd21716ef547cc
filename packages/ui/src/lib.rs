//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{submit_oauth, submit_password, use_auth, use_auth_form, AuthContext, AuthProvider};

mod form;
pub use form::{CredentialInput, FormError, FormSuccess, OrDivider, PasswordInput, SubmitButton};

mod google;
pub use google::{disable_google_auto_select, GoogleFlow, GoogleSignIn};

mod hero;
pub use hero::Hero;

mod navigation;
pub use navigation::{navigate_to, page_origin};
