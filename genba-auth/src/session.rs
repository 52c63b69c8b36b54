//! Session store.
//!
//! The session record is six scalar fields in client-local persistent
//! storage. Storage reads that fail degrade to "no session" rather
//! than surfacing an error: the shell UI prefers a safe logged-out
//! state over a hard failure.

use std::collections::HashMap;

use genba_core::tenant::TenantId;
use thiserror::Error;
use tracing::warn;

use crate::options::AuthOptions;
use crate::principal::{Principal, PrivilegeLevel};

/// Fixed storage keys. These are a persisted external contract and
/// must not change.
pub mod keys {
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_NAME: &str = "userName";
    pub const USER_ROLE: &str = "userRole";
    pub const IS_SUPER_ADMIN: &str = "isSuperAdmin";
    pub const IS_ADMIN: &str = "isAdmin";
    pub const TENANT_ID: &str = "tenantId";

    pub const ALL: [&str; 6] = [
        USER_EMAIL,
        USER_NAME,
        USER_ROLE,
        IS_SUPER_ADMIN,
        IS_ADMIN,
        TENANT_ID,
    ];
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Client-local persistent storage seam.
///
/// Implementations wrap whatever the embedding shell provides
/// (browser local storage, a file, an in-memory map for tests).
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// The session store: owns the storage seam plus the options that
/// drive privilege derivation and tenant assignment at login.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    options: AuthOptions,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S, options: AuthOptions) -> Self {
        Self { storage, options }
    }

    pub fn options(&self) -> &AuthOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Take the storage back out, e.g. to rebuild a context over it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Create a session for the given identity and persist it.
    ///
    /// Privilege is derived by comparing the email against the
    /// configured demo identities, and the tenant id is the
    /// configured default. Both are placeholder seams a production
    /// deployment replaces with real identity/tenant resolution.
    /// Write failures are logged and the principal is still
    /// returned; a half-written session later reads back as
    /// logged out.
    pub fn set_session(&mut self, email: &str, name: &str, raw_role: &str) -> Principal {
        let privilege = self.options.privilege_for(email);
        let tenant_id = self.options.default_tenant_id.clone();

        let fields = [
            (keys::USER_EMAIL, email.to_string()),
            (keys::USER_NAME, name.to_string()),
            (keys::USER_ROLE, raw_role.to_string()),
            (
                keys::IS_SUPER_ADMIN,
                privilege.is_super_admin().to_string(),
            ),
            (keys::IS_ADMIN, privilege.is_admin().to_string()),
            (keys::TENANT_ID, tenant_id.clone()),
        ];
        for (key, value) in &fields {
            if let Err(e) = self.storage.set(key, value) {
                warn!(key, error = %e, "failed to persist session field");
            }
        }

        Principal {
            email: email.to_string(),
            name: name.to_string(),
            raw_role: raw_role.to_string(),
            tenant_id: TenantId(tenant_id),
            privilege,
        }
    }

    /// Read the session back from storage.
    ///
    /// Returns `None` when no session is present, when required
    /// fields (email, role) are missing, or when any read fails:
    /// read errors are swallowed into the logged-out state.
    pub fn get_session(&self) -> Option<Principal> {
        let read = |key: &str| -> Result<Option<String>, StorageError> { self.storage.get(key) };

        let result = (|| -> Result<Option<Principal>, StorageError> {
            let email = read(keys::USER_EMAIL)?;
            let raw_role = read(keys::USER_ROLE)?;

            let (Some(email), Some(raw_role)) = (email, raw_role) else {
                return Ok(None);
            };
            if email.is_empty() || raw_role.is_empty() {
                return Ok(None);
            }

            let name = read(keys::USER_NAME)?.unwrap_or_default();
            let is_super = read(keys::IS_SUPER_ADMIN)?.as_deref() == Some("true");
            let is_admin = read(keys::IS_ADMIN)?.as_deref() == Some("true");
            let tenant_id = read(keys::TENANT_ID)?
                .unwrap_or_else(|| self.options.default_tenant_id.clone());

            // is_super wins even when the persisted pair is
            // inconsistent; the ordered level cannot disagree with
            // itself afterwards.
            let privilege = if is_super {
                PrivilegeLevel::SuperAdmin
            } else if is_admin {
                PrivilegeLevel::Admin
            } else {
                PrivilegeLevel::User
            };

            Ok(Some(Principal {
                email,
                name,
                raw_role,
                tenant_id: TenantId(tenant_id),
                privilege,
            }))
        })();

        match result {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "session read failed, treating as logged out");
                None
            }
        }
    }

    /// Erase all session fields.
    pub fn clear_session(&mut self) {
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "failed to clear session field");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new(), AuthOptions::default())
    }

    #[test]
    fn round_trip_preserves_identity_and_derives_privilege() {
        let mut store = store();
        let created = store.set_session("taro@example.com", "太郎", "営業担当");
        assert_eq!(created.privilege, PrivilegeLevel::User);

        let read = store.get_session().expect("session present");
        assert_eq!(read.email, "taro@example.com");
        assert_eq!(read.name, "太郎");
        assert_eq!(read.raw_role, "営業担当");
        assert_eq!(read.privilege, PrivilegeLevel::User);
        assert_eq!(read.tenant_id.as_str(), AuthOptions::default().default_tenant_id);
    }

    #[test]
    fn demo_identities_drive_privilege() {
        let mut store = store();
        assert_eq!(
            store.set_session("super@demo.com", "s", "admin").privilege,
            PrivilegeLevel::SuperAdmin
        );
        assert_eq!(
            store.set_session("admin@demo.com", "a", "admin").privilege,
            PrivilegeLevel::Admin
        );
    }

    #[test]
    fn persisted_flags_use_the_fixed_keys_and_string_booleans() {
        let mut store = store();
        store.set_session("super@demo.com", "s", "admin");
        let raw = store.storage();
        assert_eq!(raw.get(keys::IS_SUPER_ADMIN).unwrap().as_deref(), Some("true"));
        assert_eq!(raw.get(keys::IS_ADMIN).unwrap().as_deref(), Some("true"));
        assert_eq!(raw.get(keys::USER_EMAIL).unwrap().as_deref(), Some("super@demo.com"));
    }

    #[test]
    fn missing_required_fields_read_as_logged_out() {
        let mut store = store();
        store.set_session("taro@example.com", "太郎", "営業担当");
        store.storage.remove(keys::USER_ROLE).unwrap();
        assert!(store.get_session().is_none());
    }

    #[test]
    fn clear_session_removes_every_key() {
        let mut store = store();
        store.set_session("taro@example.com", "太郎", "営業担当");
        store.clear_session();
        assert!(store.storage().is_empty());
        assert!(store.get_session().is_none());
    }

    #[test]
    fn inconsistent_persisted_flags_resolve_to_super_admin() {
        let mut store = store();
        store.storage.set(keys::USER_EMAIL, "x@example.com").unwrap();
        store.storage.set(keys::USER_ROLE, "sales").unwrap();
        store.storage.set(keys::IS_SUPER_ADMIN, "true").unwrap();
        store.storage.set(keys::IS_ADMIN, "false").unwrap();

        let p = store.get_session().unwrap();
        assert!(p.is_super_admin());
        assert!(p.is_admin());
    }

    struct FailingStorage;

    impl SessionStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("storage unavailable".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("storage unavailable".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("storage unavailable".into()))
        }
    }

    #[test]
    fn read_errors_degrade_to_logged_out() {
        let store = SessionStore::new(FailingStorage, AuthOptions::default());
        assert!(store.get_session().is_none());
    }
}
