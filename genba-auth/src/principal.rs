use genba_core::tenant::TenantId;
use serde::{Deserialize, Serialize};

use crate::role::RoleCategory;

/// Ordered privilege level of a principal.
///
/// Replaces the pair of independent admin booleans the session record
/// persists: a single ordered level cannot express the inconsistent
/// "super admin but not admin" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeLevel {
    User,
    Admin,
    SuperAdmin,
}

impl PrivilegeLevel {
    pub fn is_admin(self) -> bool {
        self >= PrivilegeLevel::Admin
    }

    pub fn is_super_admin(self) -> bool {
        self == PrivilegeLevel::SuperAdmin
    }
}

/// The authenticated identity for one browser session.
///
/// Created on login, destroyed on logout; lives only in session
/// storage. `raw_role` keeps the free-form business-title string as
/// entered (possibly a localized title); the canonical category is
/// derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
    pub name: String,
    pub raw_role: String,
    pub tenant_id: TenantId,
    pub privilege: PrivilegeLevel,
}

impl Principal {
    /// Canonical role category for this principal's raw role label.
    pub fn role_category(&self) -> RoleCategory {
        RoleCategory::resolve(&self.raw_role)
    }

    pub fn is_admin(&self) -> bool {
        self.privilege.is_admin()
    }

    pub fn is_super_admin(&self) -> bool {
        self.privilege.is_super_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privilege_is_totally_ordered() {
        assert!(PrivilegeLevel::User < PrivilegeLevel::Admin);
        assert!(PrivilegeLevel::Admin < PrivilegeLevel::SuperAdmin);
    }

    #[test]
    fn super_admin_implies_admin() {
        assert!(PrivilegeLevel::SuperAdmin.is_admin());
        assert!(PrivilegeLevel::SuperAdmin.is_super_admin());
        assert!(PrivilegeLevel::Admin.is_admin());
        assert!(!PrivilegeLevel::Admin.is_super_admin());
        assert!(!PrivilegeLevel::User.is_admin());
    }

    #[test]
    fn category_is_derived_from_raw_role() {
        let p = Principal {
            email: "taro@example.com".into(),
            name: "太郎".into(),
            raw_role: "営業担当".into(),
            tenant_id: TenantId("t-1".into()),
            privilege: PrivilegeLevel::User,
        };
        assert_eq!(p.role_category(), RoleCategory::Sales);
    }
}
