//! Login page: email/password form plus Google sign-in.

use api::{FormMode, OAuthToken};
use dioxus::prelude::*;
use ui::{
    submit_oauth, submit_password, use_auth, use_auth_form, CredentialInput, FormError,
    GoogleFlow, GoogleSignIn, OrDivider, SubmitButton,
};

use super::auth_card::{AuthCard, AuthFooter};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut auth_form = use_auth_form(FormMode::Login);

    let loading = auth_form.read().is_loading();
    let error = auth_form.read().error().map(str::to_string);
    let client_id = auth.settings.google.client_id.clone();
    let google_enabled = auth.settings.google_enabled();

    let auth_for_submit = auth.clone();
    let auth_for_google = auth.clone();

    rsx! {
        AuthCard {
            subtitle: "Welcome back".to_string(),

            if google_enabled {
                div {
                    class: "mb-6",
                    GoogleSignIn {
                        client_id: client_id,
                        flow: GoogleFlow::IdToken,
                        disabled: loading,
                        on_token: move |token: OAuthToken| {
                            spawn(submit_oauth(auth_form, auth_for_google.clone(), token));
                        },
                        on_error: move |_| auth_form.write().provider_failed(),
                    }
                }
                OrDivider {}
            }

            if let Some(message) = error {
                FormError { message: message }
            }

            form {
                class: "space-y-6",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    spawn(submit_password(auth_form, auth_for_submit.clone()));
                },
                for (i, field) in FormMode::Login.fields().iter().copied().enumerate() {
                    CredentialInput {
                        key: "{i}",
                        field: field,
                        value: auth_form.read().credentials().get(field).to_string(),
                        oninput: move |value: String| auth_form.write().edit(field, value),
                    }
                }
                SubmitButton { label: "Sign In".to_string(), loading: loading }
            }

            AuthFooter {
                prompt: "Don't have an account?".to_string(),
                link_label: "Sign Up".to_string(),
                to: Route::Signup {},
            }
        }
    }
}
