//! # Front-end settings
//!
//! Layered with the `config` crate, lowest priority first:
//!
//! 1. built-in defaults,
//! 2. an optional `salvus.toml` next to the binary,
//! 3. environment variables prefixed `SALVUS__` (a `.env` file is loaded first).
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [routes]
//! dashboard = "/donor-dashboard"
//! set_password = "/set-password"
//! login = "/login"
//!
//! [google]
//! client_id = "1234.apps.googleusercontent.com"
//! ```
//!
//! In the browser the API base URL is overridden with the page origin, so the
//! `/api/auth/*` calls stay same-origin.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Google client id baked in at build time, if any.
fn default_google_client_id() -> &'static str {
    option_env!("GOOGLE_CLIENT_ID").unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSettings {
    /// Origin the `/api/auth/*` paths are resolved against.
    pub base_url: String,
}

/// Navigation targets chosen after a successful submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Routes {
    pub dashboard: String,
    pub set_password: String,
    pub login: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            dashboard: "/donor-dashboard".into(),
            set_password: "/set-password".into(),
            login: "/login".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoogleSettings {
    /// OAuth client id. Empty disables the Google button.
    pub client_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub routes: Routes,
    pub google: GoogleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: DEFAULT_BASE_URL.into(),
            },
            routes: Routes::default(),
            google: GoogleSettings {
                client_id: default_google_client_id().into(),
            },
        }
    }
}

impl Settings {
    /// Load defaults, `salvus.toml` and `SALVUS__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::defaults()?
            .add_source(
                File::with_name("salvus.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("SALVUS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Parse from a TOML string layered over the defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Builder method to point the client at another origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Whether Google sign-in can be offered.
    pub fn google_enabled(&self) -> bool {
        !self.google.client_id.is_empty()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let routes = Routes::default();
        Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("routes.dashboard", routes.dashboard)?
            .set_default("routes.set_password", routes.set_password)?
            .set_default("routes.login", routes.login)?
            .set_default("google.client_id", default_google_client_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_matches_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.routes.dashboard, "/donor-dashboard");
        assert_eq!(settings.routes.set_password, "/set-password");
    }

    #[test]
    fn test_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            [api]
            base_url = "https://salvus.example.org"

            [routes]
            dashboard = "/home"

            [google]
            client_id = "abc.apps.googleusercontent.com"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://salvus.example.org");
        assert_eq!(settings.routes.dashboard, "/home");
        assert_eq!(settings.routes.login, "/login");
        assert!(settings.google_enabled());
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("SALVUS__API__BASE_URL", "http://127.0.0.1:9000");
        let settings = Settings::load().unwrap_or_default();
        std::env::remove_var("SALVUS__API__BASE_URL");
        assert_eq!(settings.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_with_base_url() {
        let settings = Settings::default().with_base_url("https://salvus.example.org");
        assert_eq!(settings.api.base_url, "https://salvus.example.org");
    }
}
