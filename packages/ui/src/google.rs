//! # Google sign-in button
//!
//! Bridges Google Identity Services (GIS) into Dioxus through `document::eval`.
//! The script is injected once, the client id is sent over the eval channel,
//! and every GIS callback posts a small JSON message back:
//!
//! | Flow | GIS API | Message |
//! |------|---------|---------|
//! | [`GoogleFlow::IdToken`] | `google.accounts.id` rendered button | `{ credential }` |
//! | [`GoogleFlow::AccessToken`] | `google.accounts.oauth2` token client popup | `{ access_token }` |
//!
//! Failures arrive as `{ error }`.

use api::OAuthToken;
use dioxus::prelude::*;
use serde::Deserialize;

const BUTTON_CONTAINER_ID: &str = "google-signin-button";

const LOAD_GSI_JS: &str = r#"
const clientId = await dioxus.recv();
const loadGsi = () => new Promise((resolve, reject) => {
    if (window.google && window.google.accounts) {
        resolve();
        return;
    }
    let script = document.getElementById("gsi-client");
    if (!script) {
        script = document.createElement("script");
        script.id = "gsi-client";
        script.src = "https://accounts.google.com/gsi/client";
        script.async = true;
        document.head.appendChild(script);
    }
    script.addEventListener("load", () => resolve());
    script.addEventListener("error", () => reject(new Error("failed to load Google Identity Services")));
});
try {
    await loadGsi();
} catch (e) {
    dioxus.send({ error: String(e) });
    return;
}
"#;

const ID_TOKEN_JS: &str = r#"
google.accounts.id.initialize({
    client_id: clientId,
    auto_select: false,
    callback: (response) => dioxus.send({ credential: response.credential }),
});
google.accounts.id.renderButton(document.getElementById("google-signin-button"), {
    theme: "filled_black",
    shape: "pill",
    text: "continue_with",
});
"#;

const TOKEN_CLIENT_JS: &str = r#"
window.salvusTokenClient = google.accounts.oauth2.initTokenClient({
    client_id: clientId,
    scope: "openid email profile",
    callback: (response) => response.error
        ? dioxus.send({ error: response.error })
        : dioxus.send({ access_token: response.access_token }),
    error_callback: (err) => dioxus.send({ error: (err && err.type) || "popup_failed" }),
});
"#;

const REQUEST_ACCESS_TOKEN_JS: &str =
    "if (window.salvusTokenClient) { window.salvusTokenClient.requestAccessToken(); }";

const DISABLE_AUTO_SELECT_JS: &str =
    "if (window.google && window.google.accounts) { google.accounts.id.disableAutoSelect(); }";

/// Which GIS API produces the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleFlow {
    IdToken,
    AccessToken,
}

/// Message posted back by the GIS callbacks.
#[derive(Debug, Default, Deserialize)]
struct GsiMessage {
    credential: Option<String>,
    access_token: Option<String>,
    error: Option<String>,
}

impl GsiMessage {
    fn into_token(self) -> Result<OAuthToken, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        match (self.credential, self.access_token) {
            (Some(credential), _) if !credential.is_empty() => Ok(OAuthToken::Credential(credential)),
            (_, Some(token)) if !token.is_empty() => Ok(OAuthToken::AccessToken(token)),
            _ => Err("Google returned no token".to_string()),
        }
    }
}

/// Forget the previously chosen Google account so the next sign-in asks again.
pub fn disable_google_auto_select() {
    let _ = document::eval(DISABLE_AUTO_SELECT_JS);
}

/// "Continue with Google" button.
#[component]
pub fn GoogleSignIn(
    client_id: String,
    flow: GoogleFlow,
    on_token: EventHandler<OAuthToken>,
    on_error: EventHandler<()>,
    #[props(default = false)] disabled: bool,
) -> Element {
    use_future(move || {
        let client_id = client_id.clone();
        async move {
            let script = match flow {
                GoogleFlow::IdToken => format!("{LOAD_GSI_JS}{ID_TOKEN_JS}"),
                GoogleFlow::AccessToken => format!("{LOAD_GSI_JS}{TOKEN_CLIENT_JS}"),
            };
            let mut eval = document::eval(&script);
            if let Err(e) = eval.send(client_id) {
                tracing::error!("Failed to start Google sign-in: {:?}", e);
                on_error.call(());
                return;
            }
            loop {
                match eval.recv::<GsiMessage>().await {
                    Ok(message) => match message.into_token() {
                        Ok(token) => on_token.call(token),
                        Err(e) => {
                            tracing::warn!("Google sign-in failed: {}", e);
                            on_error.call(());
                        }
                    },
                    Err(e) => {
                        tracing::debug!("Google sign-in channel closed: {:?}", e);
                        break;
                    }
                }
            }
        }
    });

    match flow {
        GoogleFlow::IdToken => rsx! {
            div {
                id: BUTTON_CONTAINER_ID,
                class: "flex justify-center",
                style: if disabled { "pointer-events: none; opacity: 0.6;" } else { "" },
            }
        },
        GoogleFlow::AccessToken => rsx! {
            div {
                class: "flex justify-center",
                button {
                    r#type: "button",
                    class: "inline-flex items-center gap-2 px-6 py-2.5 rounded-full bg-neutral-900 text-white border border-white/20 hover:border-accent/50 hover:bg-neutral-800 disabled:opacity-60",
                    disabled: disabled,
                    onclick: move |_| {
                        let _ = document::eval(REQUEST_ACCESS_TOKEN_JS);
                    },
                    img {
                        src: "https://www.gstatic.com/firebasejs/ui/2.0.0/images/auth/google.svg",
                        alt: "",
                        class: "w-5 h-5",
                    }
                    span { "Continue with Google" }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_message() {
        let message = GsiMessage {
            credential: Some("id.token.sig".to_string()),
            ..GsiMessage::default()
        };
        assert_eq!(
            message.into_token(),
            Ok(OAuthToken::Credential("id.token.sig".to_string()))
        );
    }

    #[test]
    fn test_access_token_message() {
        let message = GsiMessage {
            access_token: Some("ya29".to_string()),
            ..GsiMessage::default()
        };
        assert_eq!(message.into_token(), Ok(OAuthToken::AccessToken("ya29".to_string())));
    }

    #[test]
    fn test_error_wins_over_token() {
        let message = GsiMessage {
            access_token: Some("ya29".to_string()),
            error: Some("access_denied".to_string()),
            ..GsiMessage::default()
        };
        assert_eq!(message.into_token(), Err("access_denied".to_string()));
    }

    #[test]
    fn test_empty_message_is_an_error() {
        let message = GsiMessage {
            credential: Some(String::new()),
            ..GsiMessage::default()
        };
        assert!(message.into_token().is_err());
    }
}
