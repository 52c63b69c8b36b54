//! Session context.
//!
//! One explicit object tying the session store and the route guard
//! together, with an explicit lifecycle: construct at app start,
//! `init()` once storage is readable, `logout()` at teardown. This
//! replaces ambient global session state; the shell injects the
//! context into whatever renders dashboards.

use crate::guard::{AuthState, GuardDecision, RouteGuard};
use crate::options::AuthOptions;
use crate::permission::PermissionMatrix;
use crate::principal::Principal;
use crate::session::{SessionStorage, SessionStore};

pub struct AuthContext<S: SessionStorage> {
    store: SessionStore<S>,
    guard: RouteGuard,
}

impl<S: SessionStorage> AuthContext<S> {
    /// Build a context over the given storage. The guard starts in
    /// `Loading` until [`init`](Self::init) runs.
    pub fn new(storage: S, options: AuthOptions) -> Self {
        let guard = RouteGuard::new(options.clone());
        Self {
            store: SessionStore::new(storage, options),
            guard,
        }
    }

    /// Resolve the persisted session once at startup.
    ///
    /// Transitions the guard out of `Loading` and returns the
    /// restored principal, if any.
    pub fn init(&mut self) -> Option<Principal> {
        self.guard.resolve(&self.store);
        self.store.get_session()
    }

    /// Log a user in: persist the session and authenticate the guard.
    pub fn login(&mut self, email: &str, name: &str, raw_role: &str) -> Principal {
        let principal = self.store.set_session(email, name, raw_role);
        self.guard.on_login();
        principal
    }

    /// Log out: erase the session and drop the guard back to
    /// unauthenticated.
    pub fn logout(&mut self) {
        self.store.clear_session();
        self.guard.on_logout();
    }

    /// The current principal, read from storage.
    pub fn current(&self) -> Option<Principal> {
        self.store.get_session()
    }

    /// Permission matrix of the current principal, if logged in.
    pub fn permissions(&self) -> Option<PermissionMatrix> {
        self.current().map(|p| PermissionMatrix::compute(&p))
    }

    pub fn state(&self) -> AuthState {
        self.guard.state()
    }

    /// Gate a navigation event.
    pub fn evaluate(&self, path: &str) -> GuardDecision {
        self.guard.evaluate(path)
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn lifecycle_init_login_logout() {
        let mut ctx = AuthContext::new(MemoryStorage::new(), AuthOptions::default());
        assert_eq!(ctx.state(), AuthState::Loading);

        assert!(ctx.init().is_none());
        assert_eq!(ctx.state(), AuthState::Unauthenticated);

        ctx.login("taro@example.com", "太郎", "営業担当");
        assert_eq!(ctx.state(), AuthState::Authenticated);
        assert!(ctx.current().is_some());

        ctx.logout();
        assert_eq!(ctx.state(), AuthState::Unauthenticated);
        assert!(ctx.current().is_none());
    }

    #[test]
    fn init_restores_a_persisted_session() {
        let mut store = SessionStore::new(MemoryStorage::new(), AuthOptions::default());
        store.set_session("taro@example.com", "太郎", "営業担当");
        let storage = store.into_storage();

        let mut ctx = AuthContext::new(storage, AuthOptions::default());
        let restored = ctx.init().expect("session restored");
        assert_eq!(restored.email, "taro@example.com");
        assert_eq!(ctx.state(), AuthState::Authenticated);
    }
}
