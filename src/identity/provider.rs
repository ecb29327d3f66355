use async_trait::async_trait;

use super::models::{AuthToken, Credential, NewProfile, Profile, ProfileUpdate, SignUpMetadata};
use crate::session::AuthError;

/// Narrow interface over the remote identity/profile service.
///
/// Any concrete implementation (REST, managed backend, custom server)
/// satisfying this contract is acceptable; the session service never
/// assumes anything beyond it.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges email and password for a credential.
    /// Fails with `AuthError::Authentication` on bad credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError>;

    /// Creates an account. The returned credential may be unverified
    /// (email verification pending).
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<Credential, AuthError>;

    /// Invalidates the remote session for the token.
    async fn sign_out(&self, token: &AuthToken) -> Result<(), AuthError>;

    /// Fetches the profile for an identity id.
    async fn get_profile(&self, identity_id: &str) -> Result<Profile, AuthError>;

    /// Creates the profile record for a freshly signed-up identity.
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, AuthError>;

    /// Merges a partial update server-side and returns the new profile.
    async fn update_profile(
        &self,
        identity_id: &str,
        update: ProfileUpdate,
    ) -> Result<Profile, AuthError>;

    /// Returns whether the username is already in use.
    async fn is_username_taken(&self, username: &str) -> Result<bool, AuthError>;
}
