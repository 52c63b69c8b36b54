//! genba-core: framework-agnostic core for the Genba business suite.
//!
//! Holds the multi-tenant context, the CRUD record-service contract
//! consumed by the role dashboards, structured errors, configuration
//! and the application container. The authorization layer lives in
//! `genba-auth` on top of this crate.

pub mod app;
pub mod config;
pub mod errors;
pub mod memory;
pub mod records;
pub mod registry;
pub mod service;
pub mod tenant;

pub use app::{GenbaApp, ServiceHandle};
pub use config::{GenbaConfig, GenbaConfigSnapshot};
pub use errors::{ErrorKind, GenbaError, GenbaResult};
pub use memory::MemoryCrudService;
pub use records::{Customer, InventoryItem, UpdateCustomer, UpdateInventoryItem};
pub use registry::ServiceRegistry;
pub use service::{CrudService, ServiceCapabilities, ServiceMethodKind};
pub use tenant::{Tenant, TenantContext, TenantId, TenantPlan, TenantSettings};
