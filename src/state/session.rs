#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Where logout (and guarded redirects) land.
pub const LOGIN_PATH: &str = "/login";

const EMPTY_CREDENTIALS_MSG: &str = "Please enter both email and password.";
const LOGIN_FAILED_MSG: &str = "Login failed. Check your email or password.";

/// Authentication state shared across the view tree.
///
/// The route guard reads only `is_authenticated` and `is_auth_checking`;
/// `loading` and `error_msg` exist for the login form.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Whether the last server check succeeded.
    pub is_authenticated: bool,
    /// True only while a verification call is in flight.
    pub is_auth_checking: bool,
    /// True only while a login call is in flight.
    pub loading: bool,
    /// Last login failure message, cleared on a new attempt.
    pub error_msg: String,
}

/// Session service: the single source of truth for "is this client
/// authenticated".
///
/// Constructed once at the application root with an injected navigation
/// callback and handed to the tree via context. Login attempts carry a
/// sequence number; only the resolution of the latest attempt may mutate
/// state, so an overlapping stale attempt can never win.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    navigate: Callback<String>,
    login_seq: StoredValue<u64>,
}

impl Session {
    pub fn new(navigate: Callback<String>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            navigate,
            login_seq: StoredValue::new(0),
        }
    }

    /// Reactive handle to the session state.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Raise the checking flag and run the server verification in the
    /// background. Called once at startup, before the router renders, so no
    /// guard ever evaluates against a pre-check state.
    pub fn spawn_status_check(&self) {
        self.begin_check();
        let session = *self;
        leptos::task::spawn_local(async move {
            let ok = api::fetch_session().await.is_ok();
            session.apply_check(ok);
        });
    }

    /// Verify the session against the server. Idempotent; safe to call again
    /// after the startup check.
    pub async fn check_status(&self) {
        self.begin_check();
        let ok = api::fetch_session().await.is_ok();
        self.apply_check(ok);
    }

    /// Attempt a login. Returns `true` on success.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let Some(attempt) = self.try_begin_login(email, password) else {
            return false;
        };
        let result = api::login(email, password).await;
        self.apply_login(attempt, result)
    }

    /// Log out. The server call is best-effort: a failure is logged, and the
    /// client still ends up unauthenticated on the login page.
    pub async fn logout(&self) {
        if let Err(err) = api::logout().await {
            leptos::logging::warn!("logout request failed: {err}");
        }
        self.finish_logout();
    }

    fn begin_check(&self) {
        self.state.update(|s| s.is_auth_checking = true);
    }

    /// Any failure fails closed: the client is unauthenticated until a check
    /// succeeds.
    fn apply_check(&self, ok: bool) {
        self.state.update(|s| {
            s.is_authenticated = ok;
            s.is_auth_checking = false;
        });
    }

    /// Validate credentials and open a fenced login attempt. Returns `None`
    /// with `error_msg` set, and without issuing any request, when either
    /// field is empty.
    fn try_begin_login(&self, email: &str, password: &str) -> Option<u64> {
        if email.is_empty() || password.is_empty() {
            self.state
                .update(|s| s.error_msg = EMPTY_CREDENTIALS_MSG.to_owned());
            return None;
        }
        let attempt = self.login_seq.get_value() + 1;
        self.login_seq.set_value(attempt);
        self.state.update(|s| {
            s.loading = true;
            s.error_msg.clear();
        });
        Some(attempt)
    }

    /// Apply a login resolution. A resolution belonging to a superseded
    /// attempt is dropped without touching state or navigating.
    fn apply_login(&self, attempt: u64, result: Result<(), ApiError>) -> bool {
        if attempt != self.login_seq.get_value() {
            return false;
        }
        match result {
            Ok(()) => {
                self.state.update(|s| {
                    s.is_authenticated = true;
                    s.loading = false;
                    s.error_msg.clear();
                });
                self.navigate.run(DASHBOARD_PATH.to_owned());
                true
            }
            Err(err) => {
                self.state.update(|s| {
                    s.loading = false;
                    s.error_msg = err
                        .server_message()
                        .map_or_else(|| LOGIN_FAILED_MSG.to_owned(), ToOwned::to_owned);
                });
                false
            }
        }
    }

    fn finish_logout(&self) {
        self.state.update(|s| {
            s.is_authenticated = false;
            s.loading = false;
        });
        self.navigate.run(LOGIN_PATH.to_owned());
    }
}
