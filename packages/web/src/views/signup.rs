//! Signup page. On success the form is replaced by a "check your email" notice.

use api::{FormMode, OAuthToken};
use dioxus::prelude::*;
use ui::{
    disable_google_auto_select, submit_oauth, submit_password, use_auth, use_auth_form,
    CredentialInput, FormError, FormSuccess, GoogleFlow, GoogleSignIn, OrDivider, SubmitButton,
};

use super::auth_card::{AuthCard, AuthFooter};
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let mut auth_form = use_auth_form(FormMode::Signup);

    // A previous Google session must not silently sign up again.
    use_hook(disable_google_auto_select);

    let loading = auth_form.read().is_loading();
    let error = auth_form.read().error().map(str::to_string);
    let success = auth_form.read().success_message().map(str::to_string);
    let client_id = auth.settings.google.client_id.clone();
    let google_enabled = auth.settings.google_enabled();

    let auth_for_submit = auth.clone();
    let auth_for_google = auth.clone();

    if let Some(message) = success {
        return rsx! {
            AuthCard {
                subtitle: "Create your account".to_string(),
                FormSuccess {
                    title: "Check Your Email".to_string(),
                    message: message,
                    Link { to: Route::Login {}, class: "text-accent font-semibold", "Proceed to Login" }
                }
            }
        };
    }

    rsx! {
        AuthCard {
            subtitle: "Create your account".to_string(),

            if google_enabled {
                div {
                    class: "mb-6",
                    GoogleSignIn {
                        client_id: client_id,
                        flow: GoogleFlow::AccessToken,
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
                class: "space-y-5",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    spawn(submit_password(auth_form, auth_for_submit.clone()));
                },
                for (i, field) in FormMode::Signup.fields().iter().copied().enumerate() {
                    CredentialInput {
                        key: "{i}",
                        field: field,
                        value: auth_form.read().credentials().get(field).to_string(),
                        oninput: move |value: String| auth_form.write().edit(field, value),
                    }
                }
                SubmitButton { label: "Create Account".to_string(), loading: loading }
            }

            AuthFooter {
                prompt: "Already have an account?".to_string(),
                link_label: "Sign In".to_string(),
                to: Route::Login {},
            }
        }
    }
}
