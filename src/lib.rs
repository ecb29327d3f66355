//! Ummah Client Library
//!
//! Application core of the social networking client: session lifecycle,
//! credential persistence, route guarding, interactive content lists
//! and in-process notifications.

pub mod config;
pub mod content;
pub mod credentials;
pub mod identity;
pub mod notifications;
pub mod routing;
pub mod session;

// Re-export commonly used types for convenience
pub use credentials::{CredentialStore, SqliteCredentialStore};
pub use identity::{HttpIdentityProvider, IdentityProvider, Profile, UserRole};
pub use notifications::Toaster;
pub use routing::{resolve_route, GuardOutcome, Route, RouteGuard};
pub use session::{AuthError, Session, SessionService, SessionState};
