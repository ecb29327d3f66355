mod sqlite_store;
mod store;

pub use sqlite_store::SqliteCredentialStore;
pub use store::{CredentialStore, AUTH_TOKEN_KEY, PROFILE_SNAPSHOT_KEY};
