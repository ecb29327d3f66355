//! Gates rendering of protected views on authentication state.

use tokio::sync::watch;
use tracing::debug;

use crate::session::SessionState;

use super::routes::Route;

/// Outcome of a guard check for a target view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested view.
    Render,
    /// Session state is not known yet; show a neutral placeholder,
    /// issue no navigation.
    Loading,
    /// No session; navigate to the auth entry point, render nothing.
    RedirectToAuth,
    /// Authenticated but lacking the required role.
    AccessDenied,
}

pub struct RouteGuard;

impl RouteGuard {
    /// Pure check of (route, session state). Re-run it on every state
    /// transition; protected content must never render before the check
    /// resolves.
    pub fn evaluate(route: Route, state: &SessionState) -> GuardOutcome {
        if route.is_public() {
            return GuardOutcome::Render;
        }
        match state {
            SessionState::Initializing => GuardOutcome::Loading,
            SessionState::Unauthenticated => GuardOutcome::RedirectToAuth,
            SessionState::Authenticated(session) => {
                if route.requires_admin() && !session.is_admin() {
                    GuardOutcome::AccessDenied
                } else {
                    GuardOutcome::Render
                }
            }
        }
    }
}

/// Drives the guard for a mounted view until the session state settles.
///
/// While the state is initializing the view stays on its loading
/// placeholder; once it resolves, `on_redirect` is invoked at most once
/// (with the auth entry point) and the final outcome is returned.
/// Returns `RedirectToAuth` without redirecting if the state channel
/// closes first, so a discarded view never navigates.
pub async fn resolve_route(
    route: Route,
    state_rx: &mut watch::Receiver<SessionState>,
    on_redirect: impl FnOnce(Route),
) -> GuardOutcome {
    loop {
        let outcome = RouteGuard::evaluate(route, &state_rx.borrow_and_update());
        match outcome {
            GuardOutcome::Loading => {
                if state_rx.changed().await.is_err() {
                    // Session service dropped while we waited.
                    return GuardOutcome::RedirectToAuth;
                }
            }
            GuardOutcome::RedirectToAuth => {
                debug!("Redirecting {:?} to auth", route);
                on_redirect(Route::Auth);
                return outcome;
            }
            GuardOutcome::Render | GuardOutcome::AccessDenied => return outcome,
        }
    }
}
