use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::config::{GenbaConfig, GenbaConfigSnapshot};
use crate::registry::ServiceRegistry;
use crate::service::CrudService;
use crate::tenant::TenantContext;

struct GenbaAppInner<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    registry: RwLock<ServiceRegistry<R, P>>,
    config: RwLock<GenbaConfig>,
}

/// GenbaApp is the central application container for the suite.
///
/// Framework-agnostic. Holds:
/// - record-service registry (customer, inventory, ...)
/// - config
///
/// Cloning is cheap: clones share the same inner state.
pub struct GenbaApp<R, P = ()>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    inner: Arc<GenbaAppInner<R, P>>,
}

impl<R, P> Default for GenbaApp<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, P> Clone for GenbaApp<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R, P> GenbaApp<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GenbaAppInner {
                registry: RwLock::new(ServiceRegistry::new()),
                config: RwLock::new(GenbaConfig::new()),
            }),
        }
    }

    /// Register a record service under a name, e.g. "customers".
    pub fn register_service<S>(&self, name: S, service: Arc<dyn CrudService<R, P>>)
    where
        S: Into<String>,
    {
        self.inner
            .registry
            .write()
            .unwrap()
            .register(name.into(), service);
    }

    /// Fetch a handle to a registered service by name.
    pub fn service(&self, name: &str) -> Result<ServiceHandle<R, P>> {
        let svc = self
            .inner
            .registry
            .read()
            .unwrap()
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("CrudService not found: {name}"))?
            .clone();

        Ok(ServiceHandle {
            name: name.to_string(),
            service: svc,
        })
    }

    /// Set a config key, e.g. `app.set("paginate.default", "10")`.
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.config.write().unwrap().set(key, value);
    }

    /// Read a config key.
    pub fn get(&self, key: &str) -> Option<String> {
        let cfg = self.inner.config.read().unwrap();
        cfg.get(key).map(|v| v.to_string())
    }

    pub fn config_snapshot(&self) -> GenbaConfigSnapshot {
        let cfg = self.inner.config.read().unwrap();
        cfg.snapshot()
    }
}

/// A named, tenant-scoped entry point into one registered service.
pub struct ServiceHandle<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    name: String,
    service: Arc<dyn CrudService<R, P>>,
}

impl<R, P> ServiceHandle<R, P>
where
    R: Send + 'static,
    P: Send + Clone + 'static,
{
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &Arc<dyn CrudService<R, P>> {
        &self.service
    }

    pub async fn find(&self, tenant: &TenantContext, params: P) -> Result<Vec<R>> {
        self.service.find(tenant, params).await
    }

    pub async fn get(&self, tenant: &TenantContext, id: &str, params: P) -> Result<R> {
        self.service.get(tenant, id, params).await
    }

    pub async fn create(&self, tenant: &TenantContext, data: R, params: P) -> Result<R> {
        self.service.create(tenant, data, params).await
    }

    pub async fn update(&self, tenant: &TenantContext, id: &str, data: R, params: P) -> Result<R> {
        self.service.update(tenant, id, data, params).await
    }

    pub async fn patch(
        &self,
        tenant: &TenantContext,
        id: Option<&str>,
        data: R,
        params: P,
    ) -> Result<R> {
        self.service.patch(tenant, id, data, params).await
    }

    pub async fn remove(&self, tenant: &TenantContext, id: Option<&str>, params: P) -> Result<R> {
        self.service.remove(tenant, id, params).await
    }
}
