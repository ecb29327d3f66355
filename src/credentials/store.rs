use anyhow::Result;

/// Key under which the opaque auth token is persisted.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key under which the serialized profile snapshot is persisted.
pub const PROFILE_SNAPSHOT_KEY: &str = "user_data";

/// Durable key-value storage for the persisted credential.
///
/// The session service is the sole writer; no other component may write
/// to it directly. Durability across restarts is required, durability
/// across devices is not.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored value for the key.
    /// Returns Ok(None) if the key is absent.
    /// Returns Err if there is a storage error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores the value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
