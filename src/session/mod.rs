mod errors;
mod models;
mod service;

pub use errors::AuthError;
pub use models::{Session, SessionState};
pub use service::SessionService;
