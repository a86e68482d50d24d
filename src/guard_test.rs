use super::*;

fn state(checking: bool, authenticated: bool) -> SessionState {
    SessionState {
        is_authenticated: authenticated,
        is_auth_checking: checking,
        ..SessionState::default()
    }
}

#[test]
fn defers_while_check_in_flight_for_every_mode() {
    for mode in [RouteMode::Protected, RouteMode::Unauthenticated] {
        for authenticated in [false, true] {
            assert_eq!(
                decide(mode, &state(true, authenticated), None),
                GuardDecision::Defer,
            );
        }
    }
}

#[test]
fn protected_renders_when_authenticated() {
    assert_eq!(
        decide(RouteMode::Protected, &state(false, true), None),
        GuardDecision::Render,
    );
}

#[test]
fn protected_redirects_to_login_by_default() {
    assert_eq!(
        decide(RouteMode::Protected, &state(false, false), None),
        GuardDecision::Redirect("/login"),
    );
}

#[test]
fn protected_honors_redirect_override() {
    assert_eq!(
        decide(RouteMode::Protected, &state(false, false), Some("/home")),
        GuardDecision::Redirect("/home"),
    );
}

#[test]
fn unauthenticated_renders_when_logged_out() {
    assert_eq!(
        decide(RouteMode::Unauthenticated, &state(false, false), None),
        GuardDecision::Render,
    );
}

#[test]
fn unauthenticated_redirects_to_dashboard_when_logged_in() {
    assert_eq!(
        decide(RouteMode::Unauthenticated, &state(false, true), None),
        GuardDecision::Redirect("/dashboard"),
    );
}

#[test]
fn login_loading_flag_does_not_affect_the_guard() {
    // The guard reads only the auth and checking flags.
    let mut s = state(false, true);
    s.loading = true;
    assert_eq!(decide(RouteMode::Protected, &s, None), GuardDecision::Render);
}
