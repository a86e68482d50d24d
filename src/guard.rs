//! Route protection: a pure decision function plus the guard component that
//! applies it reactively.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{DASHBOARD_PATH, LOGIN_PATH, Session, SessionState};

/// Declared protection mode for a route.
///
/// Closed set: a new mode must be handled in [`decide`], so there is no
/// permissive fallback for unrecognized values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMode {
    /// Renders only with an authenticated session.
    Protected,
    /// Renders only without one (landing, login, register).
    Unauthenticated,
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still in flight: render nothing, whatever the mode.
    Defer,
    /// Render the requested view.
    Render,
    /// Navigate away to the given path.
    Redirect(&'static str),
}

/// Decide whether a route renders or redirects.
///
/// Pure function of the session flags, the declared mode, and an optional
/// redirect override; the guard component re-evaluates it on every
/// session-state change and every navigation.
pub fn decide(
    mode: RouteMode,
    state: &SessionState,
    redirect_path: Option<&'static str>,
) -> GuardDecision {
    if state.is_auth_checking {
        return GuardDecision::Defer;
    }
    match mode {
        RouteMode::Protected => {
            if state.is_authenticated {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(redirect_path.unwrap_or(LOGIN_PATH))
            }
        }
        RouteMode::Unauthenticated => {
            if state.is_authenticated {
                GuardDecision::Redirect(redirect_path.unwrap_or(DASHBOARD_PATH))
            } else {
                GuardDecision::Render
            }
        }
    }
}

/// Gate a view behind the session state.
#[component]
pub fn RouteGuard(
    /// Protection mode for the wrapped view.
    mode: RouteMode,
    /// Redirect target override; defaults to `/login` for protected routes
    /// and `/dashboard` for unauthenticated-only ones.
    #[prop(optional)]
    redirect_path: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<Session>();

    move || match decide(mode, &session.state().get(), redirect_path) {
        GuardDecision::Defer => ().into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
