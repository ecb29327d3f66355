mod guard;
mod routes;

pub use guard::{resolve_route, GuardOutcome, RouteGuard};
pub use routes::Route;
