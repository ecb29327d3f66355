mod http_provider;
mod models;
mod provider;

pub use http_provider::HttpIdentityProvider;
pub use models::{
    AuthToken, Credential, NewProfile, Profile, ProfileUpdate, SignUpMetadata, UserRole,
};
pub use provider::IdentityProvider;

#[cfg(feature = "mock")]
pub use provider::MockIdentityProvider;
