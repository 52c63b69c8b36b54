use std::collections::HashMap;
use std::sync::Arc;

use crate::service::CrudService;

/// A simple registry that maps service names to CrudService instances.
///
/// Dashboards and other callers reach the customer/inventory record
/// services by name through this registry, never by concrete type.
pub struct ServiceRegistry<R, P = ()> {
    services: HashMap<String, Arc<dyn CrudService<R, P>>>,
}

impl<R, P> ServiceRegistry<R, P>
where
    R: Send + 'static,
    P: Send + 'static,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Register a service under a given name.
    pub fn register<S>(&mut self, name: S, service: Arc<dyn CrudService<R, P>>)
    where
        S: Into<String>,
    {
        self.services.insert(name.into(), service);
    }

    /// Look up a service by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn CrudService<R, P>>> {
        self.services.get(name)
    }
}

impl<R, P> Default for ServiceRegistry<R, P>
where
    R: Send + 'static,
    P: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
