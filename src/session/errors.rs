//! Error taxonomy for session operations.

use thiserror::Error;

/// Errors surfaced by session store operations.
///
/// Every variant carries a user-displayable reason; the initiating UI
/// action is expected to turn exactly one of these into a notification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Username or email already taken.
    #[error("Already taken: {0}")]
    Conflict(String),

    /// Malformed or missing input.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A mutating call was made with no active session.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Provider or network failure.
    #[error("Service error: {0}")]
    Remote(String),
}
