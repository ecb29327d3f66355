//! Session data models.

use serde::{Deserialize, Serialize};

use crate::identity::{Profile, UserRole};

/// The in-memory record of the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub identity_id: String,
    pub email: String,
    pub display_name: String,
    pub username: String,
    pub role: UserRole,
    pub verified: bool,
    /// Cached profile snapshot as last seen from the provider.
    pub profile: Profile,
}

impl Session {
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            identity_id: profile.id.clone(),
            email: profile.email.clone(),
            display_name: profile.name.clone(),
            username: profile.username.clone(),
            role: profile.role,
            verified: profile.verified,
            profile,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Authentication state of the running client.
///
/// Transitions: `Initializing` resolves once into `Unauthenticated` or
/// `Authenticated`; `login`/`register` move `Unauthenticated` to
/// `Authenticated`; `logout` moves back. No other transitions exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}
