use anyhow::Result;
use async_trait::async_trait;

use crate::errors::GenbaError;
use crate::tenant::TenantContext;

/// Standard record-service methods:
/// find, get, create, update, patch, remove.
///
/// Custom methods are declared via `Custom("methodName")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceMethodKind {
    Find,
    Get,
    Create,
    Update,
    Patch,
    Remove,
    Custom(&'static str),
}

/// Capabilities describe which methods a record service wants to
/// expose to the outside world.
///
/// Adapters can use this to mount only allowed routes.
#[derive(Debug, Clone)]
pub struct ServiceCapabilities {
    pub allowed_methods: Vec<ServiceMethodKind>,
}

impl ServiceCapabilities {
    /// Full CRUD: find, get, create, update, patch, remove.
    pub fn standard_crud() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get, Create, Update, Patch, Remove],
        }
    }

    /// Read-only surface: only `find` and `get`.
    pub fn read_only() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get],
        }
    }

    /// Helper for building from a list.
    pub fn from_methods(methods: Vec<ServiceMethodKind>) -> Self {
        Self {
            allowed_methods: methods,
        }
    }

    pub fn allows(&self, method: &ServiceMethodKind) -> bool {
        self.allowed_methods.contains(method)
    }
}

/// The CRUD contract every external record service (customer,
/// inventory, ...) exposes to the suite:
///
/// - `find`   → list/query many
/// - `get`    → fetch one by id
/// - `create` → create one
/// - `update` → full replace
/// - `patch`  → partial update (any subset of fields)
/// - `remove` → delete one or many
///
/// All methods have default implementations that return a structured
/// NotImplemented error, so a service can override only what it
/// actually supports. Every call is tenant-scoped through
/// [`TenantContext`].
#[async_trait]
pub trait CrudService<R, P = ()>: Send + Sync
where
    R: Send + 'static,
    P: Send + 'static,
{
    /// Describe which methods this service wants to expose.
    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::standard_crud()
    }

    /// Find many records (optionally filtered by params).
    async fn find(&self, _ctx: &TenantContext, _params: P) -> Result<Vec<R>> {
        Err(GenbaError::not_implemented("Method not implemented: find").into_anyhow())
    }

    /// Get a single record by id.
    async fn get(&self, _ctx: &TenantContext, _id: &str, _params: P) -> Result<R> {
        Err(GenbaError::not_implemented("Method not implemented: get").into_anyhow())
    }

    /// Create a new record.
    async fn create(&self, _ctx: &TenantContext, _data: R, _params: P) -> Result<R> {
        Err(GenbaError::not_implemented("Method not implemented: create").into_anyhow())
    }

    /// Fully replace an existing record. `id` is required.
    async fn update(&self, _ctx: &TenantContext, _id: &str, _data: R, _params: P) -> Result<R> {
        Err(GenbaError::not_implemented("Method not implemented: update").into_anyhow())
    }

    /// Partially update an existing record.
    ///
    /// The payload may carry any subset of the record's fields; the
    /// identifier is required. `id` can be `None` to indicate "multi"
    /// semantics if an implementation supports it.
    async fn patch(
        &self,
        _ctx: &TenantContext,
        _id: Option<&str>,
        _data: R,
        _params: P,
    ) -> Result<R> {
        Err(GenbaError::not_implemented("Method not implemented: patch").into_anyhow())
    }

    /// Remove an existing record.
    ///
    /// `id` can be `None` to indicate "multi" semantics if an
    /// implementation supports it.
    async fn remove(&self, _ctx: &TenantContext, _id: Option<&str>, _params: P) -> Result<R> {
        Err(GenbaError::not_implemented("Method not implemented: remove").into_anyhow())
    }
}
