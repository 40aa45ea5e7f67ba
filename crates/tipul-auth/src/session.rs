use std::sync::Arc;

use tracing::info;

use tipul_core::models::user::User;
use tipul_data::directory::Directory;

use crate::error::AuthError;

/// Every seeded account authenticates with this fixed development secret.
/// Real credential checking belongs to the backend this system mocks.
pub const DEV_PASSWORD: &str = "password";

/// Where the session currently stands.
#[derive(Debug, Clone)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(User),
}

/// Process-wide identity store. Holds the signed-in user for the lifetime
/// of the app session; login looks the user up through the directory and
/// checks the shared development secret.
pub struct Session {
    directory: Arc<dyn Directory>,
    state: SessionState,
}

impl Session {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Session {
            directory,
            state: SessionState::Anonymous,
        }
    }

    /// Authenticate by case-insensitive email plus the development secret.
    /// On failure the session is left anonymous. Unknown addresses and
    /// wrong passwords fail identically, with `InvalidCredentials`.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.state = SessionState::Authenticating;

        let user = match self.directory.find_user_by_email(email).await {
            Ok(user) => user,
            Err(e) => {
                self.state = SessionState::Anonymous;
                return Err(e.into());
            }
        };

        match user {
            Some(user) if password == DEV_PASSWORD => {
                info!(user = user.id, role = ?user.role, "login succeeded");
                self.state = SessionState::Authenticated(user);
                Ok(())
            }
            _ => {
                info!(email, "login rejected");
                self.state = SessionState::Anonymous;
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Clear the current user unconditionally. No server round-trip.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(user) = &self.state {
            info!(user = user.id, "logged out");
        }
        self.state = SessionState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
