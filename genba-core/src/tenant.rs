//! Core multi-tenant types for the Genba suite.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A simple tenant identifier.
/// Kept as an opaque string so it can hold a UUID, slug, or composite key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Context carried with every Genba operation.
///
/// Passed into every record-service call so that all CRUD logic is
/// explicitly tenant-aware.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant_id: TenantId,
}

impl TenantContext {
    /// Convenience constructor from a string.
    pub fn new<S: Into<String>>(tenant: S) -> Self {
        Self {
            tenant_id: TenantId(tenant.into()),
        }
    }
}

/// Subscription plan a tenant is contracted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantPlan {
    Demo,
    Basic,
    Professional,
    Enterprise,
}

/// Per-tenant feature toggles and customization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub estimates: bool,
    pub inventory: bool,
    pub marketing: bool,
    pub rag_copilot: bool,
    pub company_logo: Option<String>,
    pub primary_color: Option<String>,
}

/// A tenant record as owned by the tenant-management collaborator.
///
/// Read-only from this crate's point of view: the authorization core
/// never creates or mutates tenants, it only scopes work by
/// [`TenantId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub company_name: String,
    pub plan: TenantPlan,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub max_users: u32,
    pub current_users: u32,
    #[serde(default)]
    pub settings: TenantSettings,
}

impl Tenant {
    /// Whether the tenant still has seats available under its plan.
    pub fn has_free_seat(&self) -> bool {
        self.current_users < self.max_users
    }

    /// Whether a calendar date falls inside the contract window.
    pub fn contract_active_on(&self, date: NaiveDate) -> bool {
        date >= self.contract_start && date <= self.contract_end
    }
}
