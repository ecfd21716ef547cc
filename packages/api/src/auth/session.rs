//! Session outcomes and the navigation they trigger.

use crate::config::Routes;
use crate::models::GoogleAuthResponse;

/// What a successful submission means for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Signed in with an account that already has a password.
    Authenticated,
    /// Signed in through Google, but the account has no local password yet.
    NeedsPasswordSetup,
    /// Account created; the backend sent a verification email.
    PendingVerification { message: String },
}

impl SessionOutcome {
    /// Map the Google endpoint's reply onto an outcome.
    pub fn from_google(response: &GoogleAuthResponse) -> Self {
        if response.needs_password_setup {
            Self::NeedsPasswordSetup
        } else {
            Self::Authenticated
        }
    }

    /// Route to navigate to, or `None` when the form stays on screen.
    pub fn redirect<'a>(&self, routes: &'a Routes) -> Option<&'a str> {
        match self {
            Self::Authenticated => Some(&routes.dashboard),
            Self::NeedsPasswordSetup => Some(&routes.set_password),
            Self::PendingVerification { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_setup_never_goes_to_dashboard() {
        let routes = Routes::default();
        let outcome = SessionOutcome::from_google(&GoogleAuthResponse {
            needs_password_setup: true,
            message: None,
        });
        assert_eq!(outcome, SessionOutcome::NeedsPasswordSetup);
        assert_eq!(outcome.redirect(&routes), Some("/set-password"));
    }

    #[test]
    fn test_google_without_flag_goes_to_dashboard() {
        let routes = Routes::default();
        let outcome = SessionOutcome::from_google(&GoogleAuthResponse::default());
        assert_eq!(outcome.redirect(&routes), Some("/donor-dashboard"));
    }

    #[test]
    fn test_pending_verification_stays() {
        let outcome = SessionOutcome::PendingVerification {
            message: "Check your inbox".to_string(),
        };
        assert_eq!(outcome.redirect(&Routes::default()), None);
    }
}
