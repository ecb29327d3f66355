//! Common test infrastructure
//!
//! Fake identity provider, seeded identities and service builders used
//! by the integration tests. Tests should only import from this module,
//! not from internal submodules.

mod constants;
mod fixtures;
mod provider;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{seeded_service, service_with_store};
pub use provider::FakeIdentityProvider;
