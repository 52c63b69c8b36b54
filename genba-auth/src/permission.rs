//! Permission model.
//!
//! Each principal gets a matrix of per-feature access levels,
//! computed (never stored) from the role category plus the privilege
//! level. Role baselines are a configuration table; elevation rules
//! sit on top of it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::principal::{Principal, PrivilegeLevel};
use crate::role::RoleCategory;

/// The gated features of the suite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Estimates,
    Customers,
    Inventory,
    Accounting,
    Reports,
    Settings,
    Users,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Estimates,
        Feature::Customers,
        Feature::Inventory,
        Feature::Accounting,
        Feature::Reports,
        Feature::Settings,
        Feature::Users,
    ];
}

/// Totally ordered access level for one feature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    None,
    View,
    Edit,
    Delete,
    Full,
}

/// Per-feature access levels for one principal.
///
/// Total over [`Feature::ALL`]: every feature has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    levels: BTreeMap<Feature, PermissionLevel>,
}

/// Static per-role baseline table. Editing access for a role means
/// editing this table, not the resolution code.
fn baseline(category: &RoleCategory) -> [(Feature, PermissionLevel); 7] {
    use Feature::*;
    use PermissionLevel::*;

    match category {
        RoleCategory::Executive => [
            (Estimates, Full),
            (Customers, Full),
            (Inventory, View),
            (Accounting, Full),
            (Reports, Full),
            (Settings, Edit),
            (Users, View),
        ],
        RoleCategory::Manager => [
            (Estimates, Delete),
            (Customers, Edit),
            (Inventory, View),
            (Accounting, View),
            (Reports, Full),
            (Settings, View),
            (Users, View),
        ],
        RoleCategory::Sales => [
            (Estimates, Edit),
            (Customers, Edit),
            (Inventory, View),
            (Accounting, None),
            (Reports, View),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::Accounting => [
            (Estimates, View),
            (Customers, View),
            (Inventory, None),
            (Accounting, Full),
            (Reports, Edit),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::Marketing => [
            (Estimates, View),
            (Customers, View),
            (Inventory, None),
            (Accounting, None),
            (Reports, Edit),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::Construction => [
            (Estimates, View),
            (Customers, View),
            (Inventory, Edit),
            (Accounting, None),
            (Reports, View),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::Office => [
            (Estimates, Edit),
            (Customers, Edit),
            (Inventory, View),
            (Accounting, View),
            (Reports, View),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::Aftercare => [
            (Estimates, View),
            (Customers, Edit),
            (Inventory, View),
            (Accounting, None),
            (Reports, View),
            (Settings, None),
            (Users, None),
        ],
        RoleCategory::SuperAdmin => [
            (Estimates, Full),
            (Customers, Full),
            (Inventory, Full),
            (Accounting, Full),
            (Reports, Full),
            (Settings, Full),
            (Users, Full),
        ],
        RoleCategory::Admin => [
            (Estimates, Edit),
            (Customers, Edit),
            (Inventory, Edit),
            (Accounting, Edit),
            (Reports, Edit),
            (Settings, Full),
            (Users, Full),
        ],
        RoleCategory::Custom(_) => [
            (Estimates, View),
            (Customers, View),
            (Inventory, None),
            (Accounting, None),
            (Reports, View),
            (Settings, None),
            (Users, None),
        ],
    }
}

impl PermissionMatrix {
    /// Compute the matrix for a principal. Deterministic and
    /// idempotent: the same principal always yields the same matrix.
    ///
    /// Elevation on top of the role baseline:
    /// - `SuperAdmin` privilege: Full on every feature.
    /// - `Admin` privilege: every feature raised to at least Edit,
    ///   plus Full on Settings and Users.
    pub fn compute(principal: &Principal) -> Self {
        let category = principal.role_category();

        match principal.privilege {
            PrivilegeLevel::SuperAdmin => Self::full(),
            PrivilegeLevel::Admin => {
                let mut levels: BTreeMap<Feature, PermissionLevel> = baseline(&category)
                    .into_iter()
                    .map(|(f, l)| (f, l.max(PermissionLevel::Edit)))
                    .collect();
                levels.insert(Feature::Settings, PermissionLevel::Full);
                levels.insert(Feature::Users, PermissionLevel::Full);
                Self { levels }
            }
            PrivilegeLevel::User => Self {
                levels: baseline(&category).into_iter().collect(),
            },
        }
    }

    /// Full access on every feature.
    pub fn full() -> Self {
        Self {
            levels: Feature::ALL
                .into_iter()
                .map(|f| (f, PermissionLevel::Full))
                .collect(),
        }
    }

    /// Access level for one feature.
    pub fn level(&self, feature: Feature) -> PermissionLevel {
        self.levels
            .get(&feature)
            .copied()
            .unwrap_or(PermissionLevel::None)
    }

    /// Whether this matrix grants at least `required` on `feature`.
    pub fn allows(&self, feature: Feature, required: PermissionLevel) -> bool {
        self.level(feature) >= required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genba_core::tenant::TenantId;

    fn principal(raw_role: &str, privilege: PrivilegeLevel) -> Principal {
        Principal {
            email: "user@example.com".into(),
            name: "user".into(),
            raw_role: raw_role.into(),
            tenant_id: TenantId("t-1".into()),
            privilege,
        }
    }

    #[test]
    fn levels_are_totally_ordered() {
        use PermissionLevel::*;
        assert!(None < View && View < Edit && Edit < Delete && Delete < Full);
    }

    #[test]
    fn compute_is_idempotent() {
        let p = principal("営業担当", PrivilegeLevel::User);
        assert_eq!(PermissionMatrix::compute(&p), PermissionMatrix::compute(&p));
    }

    #[test]
    fn super_admin_gets_full_everywhere() {
        let p = principal("営業担当", PrivilegeLevel::SuperAdmin);
        let m = PermissionMatrix::compute(&p);
        for f in Feature::ALL {
            assert_eq!(m.level(f), PermissionLevel::Full);
        }
    }

    #[test]
    fn sales_baseline_matches_table() {
        let m = PermissionMatrix::compute(&principal("営業担当", PrivilegeLevel::User));
        assert_eq!(m.level(Feature::Estimates), PermissionLevel::Edit);
        assert_eq!(m.level(Feature::Customers), PermissionLevel::Edit);
        assert_eq!(m.level(Feature::Accounting), PermissionLevel::None);
        assert_eq!(m.level(Feature::Settings), PermissionLevel::None);
        assert!(m.allows(Feature::Inventory, PermissionLevel::View));
        assert!(!m.allows(Feature::Inventory, PermissionLevel::Edit));
    }

    #[test]
    fn admin_elevation_is_monotone_over_baseline() {
        let base = PermissionMatrix::compute(&principal("経理担当", PrivilegeLevel::User));
        let admin = PermissionMatrix::compute(&principal("経理担当", PrivilegeLevel::Admin));
        for f in Feature::ALL {
            assert!(admin.level(f) >= base.level(f));
            assert!(admin.level(f) >= PermissionLevel::Edit);
        }
        assert_eq!(admin.level(Feature::Settings), PermissionLevel::Full);
        assert_eq!(admin.level(Feature::Users), PermissionLevel::Full);
    }

    #[test]
    fn custom_roles_get_the_minimal_baseline() {
        let m = PermissionMatrix::compute(&principal("現場監督補佐", PrivilegeLevel::User));
        assert_eq!(m.level(Feature::Estimates), PermissionLevel::View);
        assert_eq!(m.level(Feature::Users), PermissionLevel::None);
    }

    #[test]
    fn matrix_is_total_over_features() {
        let m = PermissionMatrix::compute(&principal("事務員", PrivilegeLevel::User));
        for f in Feature::ALL {
            // level() is defined for every feature, no panics, no gaps
            let _ = m.level(f);
        }
    }
}
