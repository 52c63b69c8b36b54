//! Route guard.
//!
//! A three-state machine evaluated on every navigation event. The
//! explicit `Loading` state exists so the guard never redirects while
//! the session is still being read back from storage; the decision is
//! `Pending` until the state resolves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::AuthOptions;
use crate::session::{SessionStorage, SessionStore};

/// An entry of the public-path allow-list: exact paths or path
/// prefixes (e.g. an API namespace).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicPath {
    Exact(String),
    Prefix(String),
}

impl PublicPath {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PublicPath::Exact(p) => path == p,
            PublicPath::Prefix(p) => path.starts_with(p.as_str()),
        }
    }
}

/// Authentication state as seen by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Session status not yet determined (storage read in flight).
    Loading,
    Unauthenticated,
    Authenticated,
}

/// What the shell should do with the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Still loading; render nothing, decide on the next pass.
    Pending,
    RedirectToLogin { to: String },
}

/// Navigation gate for one session.
pub struct RouteGuard {
    state: AuthState,
    options: AuthOptions,
}

impl RouteGuard {
    /// A fresh guard starts in `Loading`: no redirects until the
    /// session status has been resolved once.
    pub fn new(options: AuthOptions) -> Self {
        Self {
            state: AuthState::Loading,
            options,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Resolve `Loading` by reading the session back from storage.
    pub fn resolve<S: SessionStorage>(&mut self, store: &SessionStore<S>) {
        self.state = if store.get_session().is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
    }

    /// Transition on successful login.
    pub fn on_login(&mut self) {
        self.state = AuthState::Authenticated;
    }

    /// Transition on logout.
    pub fn on_logout(&mut self) {
        self.state = AuthState::Unauthenticated;
    }

    /// Evaluate a navigation to `path`.
    ///
    /// Public paths are always allowed. Protected paths are `Pending`
    /// while loading, allowed when authenticated, and otherwise
    /// redirect to the login entry point, silently: this is not an
    /// error condition.
    pub fn evaluate(&self, path: &str) -> GuardDecision {
        if self.options.is_public_path(path) {
            return GuardDecision::Allow;
        }

        match self.state {
            AuthState::Loading => GuardDecision::Pending,
            AuthState::Authenticated => GuardDecision::Allow,
            AuthState::Unauthenticated => {
                debug!(path, "unauthenticated navigation, redirecting to login");
                GuardDecision::RedirectToLogin {
                    to: self.options.login_path.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    fn guard() -> RouteGuard {
        RouteGuard::new(AuthOptions::default())
    }

    #[test]
    fn public_paths_allow_regardless_of_state() {
        let mut g = guard();
        for path in ["/login", "/", "/api/x", "/api"] {
            assert_eq!(g.evaluate(path), GuardDecision::Allow);
        }
        g.on_login();
        assert_eq!(g.evaluate("/login"), GuardDecision::Allow);
        g.on_logout();
        assert_eq!(g.evaluate("/login"), GuardDecision::Allow);
    }

    #[test]
    fn protected_paths_are_pending_while_loading() {
        let g = guard();
        assert_eq!(g.state(), AuthState::Loading);
        assert_eq!(g.evaluate("/dashboard"), GuardDecision::Pending);
    }

    #[test]
    fn unauthenticated_protected_navigation_redirects() {
        let mut g = guard();
        g.on_logout();
        assert_eq!(
            g.evaluate("/dashboard"),
            GuardDecision::RedirectToLogin { to: "/login".to_string() }
        );
    }

    #[test]
    fn authenticated_navigation_is_allowed() {
        let mut g = guard();
        g.on_login();
        assert_eq!(g.evaluate("/dashboard"), GuardDecision::Allow);
    }

    #[test]
    fn prefix_matching_is_prefix_not_substring() {
        let p = PublicPath::Prefix("/api".to_string());
        assert!(p.matches("/api"));
        assert!(p.matches("/api/customers"));
        assert!(!p.matches("/v1/api"));

        let e = PublicPath::Exact("/".to_string());
        assert!(e.matches("/"));
        assert!(!e.matches("/dashboard"));
    }

    #[test]
    fn resolve_reads_session_state_from_storage() {
        let store = SessionStore::new(MemoryStorage::new(), AuthOptions::default());
        let mut g = guard();
        g.resolve(&store);
        assert_eq!(g.state(), AuthState::Unauthenticated);

        let mut store = store;
        store.set_session("taro@example.com", "太郎", "営業担当");
        let mut g = RouteGuard::new(AuthOptions::default());
        g.resolve(&store);
        assert_eq!(g.state(), AuthState::Authenticated);
    }
}
