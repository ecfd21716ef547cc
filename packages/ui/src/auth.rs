//! Authentication context and form hooks for the UI.

use api::{AuthFormController, FormMode, HttpAuthClient, OAuthToken, Settings};
use dioxus::prelude::*;

use crate::navigation::{navigate_to, page_origin};

/// Backend client and settings shared by every auth form.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub client: HttpAuthClient,
    pub settings: Settings,
}

impl AuthContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: HttpAuthClient::new(settings.api.base_url.clone()),
            settings,
        }
    }
}

/// In the browser the API lives on the page origin; elsewhere read the config.
fn load_settings() -> Settings {
    if let Some(origin) = page_origin() {
        return Settings::default().with_base_url(origin);
    }
    match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Get the shared auth context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// A controller for one form, kept in a signal so edits re-render.
pub fn use_auth_form(mode: FormMode) -> Signal<AuthFormController> {
    use_signal(move || AuthFormController::new(mode))
}

/// Provider component that makes the auth client available.
/// Wrap your app with this component to enable the auth forms.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    use_context_provider(|| AuthContext::new(load_settings()));

    rsx! {
        {children}
    }
}

/// Submit the typed credentials and follow the resulting redirect.
///
/// The signal is only borrowed for the synchronous begin/finish steps, never
/// across the request.
pub async fn submit_password(mut form: Signal<AuthFormController>, auth: AuthContext) {
    let begun = form.write().begin_password();
    let Ok(submission) = begun else {
        return;
    };
    let result = submission.send(&auth.client).await;
    let finished = form.write().finish(result);
    follow_redirect(finished, &auth);
}

/// Forward a Google token and follow the resulting redirect.
pub async fn submit_oauth(mut form: Signal<AuthFormController>, auth: AuthContext, token: OAuthToken) {
    let begun = form.write().begin_oauth(token);
    let Ok(submission) = begun else {
        return;
    };
    let result = submission.send(&auth.client).await;
    let finished = form.write().finish(result);
    follow_redirect(finished, &auth);
}

fn follow_redirect(result: Result<api::SessionOutcome, api::AuthError>, auth: &AuthContext) {
    if let Ok(outcome) = result {
        if let Some(target) = outcome.redirect(&auth.settings.routes) {
            navigate_to(target);
        }
    }
}
