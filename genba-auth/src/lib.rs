//! genba-auth: the authorization core of the Genba business suite.
//!
//! Everything that gates a dashboard or CRUD endpoint lives here:
//!
//! - [`Principal`] / [`PrivilegeLevel`]: who is logged in and at
//!   what privilege
//! - [`RoleCategory`]: canonical role derived from the free-form
//!   (often localized) business-title string
//! - [`PermissionMatrix`]: per-feature access levels computed from
//!   role + privilege
//! - [`SessionStore`]: the six-key client-local session record
//! - [`RouteGuard`]: public/protected path decisions with an
//!   explicit loading phase
//! - [`DashboardVariant`]: which dashboard a role lands on
//!
//! The CRUD record services the dashboards consume are contracts in
//! `genba-core`; this crate never talks to a persistent store.

pub mod context;
pub mod dashboard;
pub mod guard;
pub mod options;
pub mod permission;
pub mod principal;
pub mod role;
pub mod session;

pub use context::AuthContext;
pub use dashboard::{can_create_estimate, DashboardVariant, EstimateFlow};
pub use guard::{AuthState, GuardDecision, PublicPath, RouteGuard};
pub use options::{AuthOptions, AuthOptionsBuilder};
pub use permission::{Feature, PermissionLevel, PermissionMatrix};
pub use principal::{Principal, PrivilegeLevel};
pub use role::RoleCategory;
pub use session::{MemoryStorage, SessionStorage, SessionStore, StorageError};
