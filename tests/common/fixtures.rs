use std::sync::Arc;

use ummah_client::{SessionService, SqliteCredentialStore};

use super::provider::FakeIdentityProvider;

/// Session service over a seeded fake provider and a fresh in-memory
/// credential store. Returns the provider and store too so tests can
/// script failures and inspect persistence.
pub fn seeded_service() -> (
    SessionService,
    Arc<FakeIdentityProvider>,
    Arc<SqliteCredentialStore>,
) {
    let provider = Arc::new(FakeIdentityProvider::with_seeded_users());
    let store = Arc::new(SqliteCredentialStore::in_memory().unwrap());
    let service = SessionService::new(provider.clone(), store.clone());
    (service, provider, store)
}

/// Service reusing an existing credential store, for restart scenarios.
pub fn service_with_store(
    provider: Arc<FakeIdentityProvider>,
    store: Arc<SqliteCredentialStore>,
) -> SessionService {
    SessionService::new(provider, store)
}
