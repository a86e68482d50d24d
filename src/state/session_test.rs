use std::sync::{Arc, Mutex};

use super::*;

fn recording_session() -> (Session, Arc<Mutex<Vec<String>>>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let session = Session::new(Callback::new(move |path: String| {
        sink.lock().unwrap().push(path);
    }));
    (session, recorded)
}

fn state_of(session: &Session) -> SessionState {
    session.state().get_untracked()
}

// =============================================================
// Status checks
// =============================================================

#[test]
fn starts_unauthenticated_and_idle() {
    let (session, _) = recording_session();
    let s = state_of(&session);
    assert!(!s.is_authenticated);
    assert!(!s.is_auth_checking);
    assert!(!s.loading);
    assert!(s.error_msg.is_empty());
}

#[test]
fn begin_check_raises_checking_flag() {
    let (session, _) = recording_session();
    session.begin_check();
    assert!(state_of(&session).is_auth_checking);
}

#[test]
fn successful_check_authenticates_and_clears_checking() {
    let (session, _) = recording_session();
    session.begin_check();
    session.apply_check(true);
    let s = state_of(&session);
    assert!(s.is_authenticated);
    assert!(!s.is_auth_checking);
}

#[test]
fn failed_check_fails_closed() {
    let (session, _) = recording_session();
    session.begin_check();
    session.apply_check(false);
    let s = state_of(&session);
    assert!(!s.is_authenticated);
    assert!(!s.is_auth_checking);
}

#[test]
fn recheck_can_revoke_authentication() {
    let (session, _) = recording_session();
    session.begin_check();
    session.apply_check(true);
    session.begin_check();
    session.apply_check(false);
    assert!(!state_of(&session).is_authenticated);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_empty_email_sets_error_without_attempt() {
    let (session, recorded) = recording_session();
    assert!(session.try_begin_login("", "pw123456").is_none());
    let s = state_of(&session);
    assert!(!s.error_msg.is_empty());
    assert!(!s.loading);
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn login_with_empty_password_sets_error_without_attempt() {
    let (session, recorded) = recording_session();
    assert!(session.try_begin_login("a@b.com", "").is_none());
    assert!(!state_of(&session).error_msg.is_empty());
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn begin_login_raises_loading_and_clears_previous_error() {
    let (session, _) = recording_session();
    assert!(session.try_begin_login("", "").is_none());
    assert!(!state_of(&session).error_msg.is_empty());

    let attempt = session.try_begin_login("a@b.com", "pw123456");
    assert!(attempt.is_some());
    let s = state_of(&session);
    assert!(s.loading);
    assert!(s.error_msg.is_empty());
}

#[test]
fn successful_login_authenticates_and_navigates_once() {
    let (session, recorded) = recording_session();
    let attempt = session.try_begin_login("a@b.com", "pw123456").expect("attempt");
    assert!(session.apply_login(attempt, Ok(())));

    let s = state_of(&session);
    assert!(s.is_authenticated);
    assert!(!s.loading);
    assert!(s.error_msg.is_empty());
    assert_eq!(recorded.lock().unwrap().as_slice(), [DASHBOARD_PATH]);
}

#[test]
fn rejected_login_surfaces_server_message() {
    let (session, recorded) = recording_session();
    let attempt = session.try_begin_login("a@b.com", "wrong").expect("attempt");
    let rejected = ApiError::Server {
        status: 401,
        message: "bad credentials".to_owned(),
    };
    assert!(!session.apply_login(attempt, Err(rejected)));

    let s = state_of(&session);
    assert!(!s.is_authenticated);
    assert!(!s.loading);
    assert_eq!(s.error_msg, "bad credentials");
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn rejected_login_falls_back_to_generic_message() {
    let (session, _) = recording_session();
    let attempt = session.try_begin_login("a@b.com", "pw123456").expect("attempt");
    assert!(!session.apply_login(attempt, Err(ApiError::Network("timed out".to_owned()))));
    assert_eq!(state_of(&session).error_msg, LOGIN_FAILED_MSG);
}

#[test]
fn stale_login_resolution_is_dropped() {
    let (session, recorded) = recording_session();
    let first = session.try_begin_login("a@b.com", "old").expect("first");
    let second = session.try_begin_login("a@b.com", "new").expect("second");

    // The superseded attempt resolves first; it must not win.
    assert!(!session.apply_login(first, Ok(())));
    assert!(!state_of(&session).is_authenticated);
    assert!(recorded.lock().unwrap().is_empty());

    assert!(session.apply_login(second, Ok(())));
    assert!(state_of(&session).is_authenticated);
    assert_eq!(recorded.lock().unwrap().len(), 1);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_session_and_navigates_to_login() {
    let (session, recorded) = recording_session();
    session.begin_check();
    session.apply_check(true);

    // The server outcome is irrelevant; the client always ends logged out.
    session.finish_logout();
    let s = state_of(&session);
    assert!(!s.is_authenticated);
    assert!(!s.loading);
    assert_eq!(recorded.lock().unwrap().as_slice(), [LOGIN_PATH]);
}
