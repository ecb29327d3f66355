//! The session store: single authoritative representation of who is
//! logged in for the running client.

use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::credentials::{CredentialStore, AUTH_TOKEN_KEY, PROFILE_SNAPSHOT_KEY};
use crate::identity::{
    AuthToken, IdentityProvider, NewProfile, Profile, ProfileUpdate, SignUpMetadata,
};

use super::errors::AuthError;
use super::models::{Session, SessionState};

/// Owns the session lifecycle and the persisted credential.
///
/// Mutating auth calls (`login`, `register`, `logout`, `update_profile`)
/// are serialized: at most one is in flight per service instance.
/// Observers follow state transitions through [`SessionService::subscribe`].
pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    credentials: Arc<dyn CredentialStore>,
    state_tx: watch::Sender<SessionState>,
    auth_lock: Mutex<()>,
}

impl SessionService {
    pub fn new(provider: Arc<dyn IdentityProvider>, credentials: Arc<dyn CredentialStore>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Initializing);
        Self {
            provider,
            credentials,
            state_tx,
            auth_lock: Mutex::new(()),
        }
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to session state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Attempts to rehydrate the session from the persisted credential.
    ///
    /// Never surfaces an error: any failure (corrupt snapshot, revoked
    /// token, provider unreachable) clears the persisted credential and
    /// resolves to the unauthenticated state.
    pub async fn initialize(&self) {
        let _guard = self.auth_lock.lock().await;

        let token = match self.credentials.get(AUTH_TOKEN_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.state_tx.send_replace(SessionState::Unauthenticated);
                return;
            }
            Err(err) => {
                warn!("Failed to read persisted credential: {}", err);
                self.clear_persisted();
                self.state_tx.send_replace(SessionState::Unauthenticated);
                return;
            }
        };

        let snapshot = match self.read_snapshot() {
            Some(snapshot) => snapshot,
            None => {
                self.clear_persisted();
                self.state_tx.send_replace(SessionState::Unauthenticated);
                return;
            }
        };

        match self.provider.get_profile(&snapshot.id).await {
            Ok(fresh) => {
                self.persist(&AuthToken(token), &fresh);
                info!("Session restored for {}", fresh.username);
                self.state_tx
                    .send_replace(SessionState::Authenticated(Session::from_profile(fresh)));
            }
            Err(err) => {
                warn!("Persisted credential rejected: {}", err);
                self.clear_persisted();
                self.state_tx.send_replace(SessionState::Unauthenticated);
            }
        }
    }

    /// Signs in with email and password. On success the credential is
    /// persisted and the session populated; on failure the session is
    /// unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let _guard = self.auth_lock.lock().await;

        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let credential = self.provider.sign_in(email, password).await?;
        let profile = self.provider.get_profile(&credential.identity_id).await?;

        self.persist(&credential.token, &profile);
        let session = Session::from_profile(profile);
        info!("Signed in as {}", session.username);
        self.state_tx
            .send_replace(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    /// Creates an account and signs in. The username is checked for
    /// availability first; the created account may start unverified.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        username: &str,
    ) -> Result<Session, AuthError> {
        let _guard = self.auth_lock.lock().await;

        if email.trim().is_empty()
            || password.is_empty()
            || name.trim().is_empty()
            || username.trim().is_empty()
        {
            return Err(AuthError::Validation(
                "Email, password, name and username are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AuthError::Validation(format!(
                "{} is not a valid email address",
                email
            )));
        }

        if self.provider.is_username_taken(username).await? {
            return Err(AuthError::Conflict(format!("username {}", username)));
        }

        let metadata = SignUpMetadata {
            name: name.to_string(),
            username: username.to_string(),
        };
        let credential = self.provider.sign_up(email, password, metadata).await?;
        let profile = self
            .provider
            .create_profile(NewProfile {
                id: credential.identity_id.clone(),
                email: email.to_string(),
                name: name.to_string(),
                username: username.to_string(),
            })
            .await?;

        self.persist(&credential.token, &profile);
        let session = Session::from_profile(profile);
        if !session.verified {
            info!("Registered {} (email verification pending)", session.username);
        } else {
            info!("Registered {}", session.username);
        }
        self.state_tx
            .send_replace(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    /// Signs out. The remote invalidation is best-effort; the local
    /// session and persisted credential are cleared unconditionally.
    pub async fn logout(&self) {
        let _guard = self.auth_lock.lock().await;

        if let Ok(Some(token)) = self.credentials.get(AUTH_TOKEN_KEY) {
            if let Err(err) = self.provider.sign_out(&AuthToken(token)).await {
                warn!("Remote sign-out failed: {}", err);
            }
        }

        self.clear_persisted();
        info!("Signed out");
        self.state_tx.send_replace(SessionState::Unauthenticated);
    }

    /// Merges a partial profile update server-side, then locally.
    /// Requires an active session; the session is unchanged on failure.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Session, AuthError> {
        let _guard = self.auth_lock.lock().await;

        let current = match self.state_tx.borrow().session().cloned() {
            Some(session) => session,
            None => return Err(AuthError::NotAuthenticated),
        };
        if update.is_empty() {
            return Err(AuthError::Validation("Nothing to update".to_string()));
        }

        let profile = self
            .provider
            .update_profile(&current.identity_id, update)
            .await?;

        if let Ok(Some(token)) = self.credentials.get(AUTH_TOKEN_KEY) {
            self.persist(&AuthToken(token), &profile);
        }
        let session = Session::from_profile(profile);
        self.state_tx
            .send_replace(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    /// Reads and parses the persisted profile snapshot.
    fn read_snapshot(&self) -> Option<Profile> {
        let raw = match self.credentials.get(PROFILE_SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read profile snapshot: {}", err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!("Corrupt profile snapshot: {}", err);
                None
            }
        }
    }

    /// Persists token and snapshot. Storage failures degrade to a
    /// session that will not survive a restart, they never fail the
    /// originating auth call.
    fn persist(&self, token: &AuthToken, profile: &Profile) {
        if let Err(err) = self.credentials.set(AUTH_TOKEN_KEY, &token.0) {
            warn!("Failed to persist auth token: {}", err);
            return;
        }
        match serde_json::to_string(profile) {
            Ok(snapshot) => {
                if let Err(err) = self.credentials.set(PROFILE_SNAPSHOT_KEY, &snapshot) {
                    warn!("Failed to persist profile snapshot: {}", err);
                }
            }
            Err(err) => warn!("Failed to serialize profile snapshot: {}", err),
        }
    }

    fn clear_persisted(&self) {
        if let Err(err) = self.credentials.remove(AUTH_TOKEN_KEY) {
            warn!("Failed to clear auth token: {}", err);
        }
        if let Err(err) = self.credentials.remove(PROFILE_SNAPSHOT_KEY) {
            warn!("Failed to clear profile snapshot: {}", err);
        }
    }
}
