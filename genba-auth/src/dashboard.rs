//! Dashboard dispatch.
//!
//! Given a resolved role category, pick the dashboard view and the
//! UI affordances it exposes. Pure routing decisions only; the
//! estimate-creation pages themselves belong to an external
//! collaborator.

use serde::{Deserialize, Serialize};

use crate::role::RoleCategory;

/// Which dashboard view to render for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Sales,
    Manager,
    Executive,
    Marketing,
    Accounting,
    Construction,
    Office,
    Aftercare,
    /// Fallback for admin and custom roles without a dedicated view.
    Generic,
}

impl DashboardVariant {
    /// Total dispatch with an explicit generic default.
    pub fn select(category: &RoleCategory) -> Self {
        match category {
            RoleCategory::Sales => DashboardVariant::Sales,
            RoleCategory::Manager => DashboardVariant::Manager,
            RoleCategory::Executive => DashboardVariant::Executive,
            RoleCategory::Marketing => DashboardVariant::Marketing,
            RoleCategory::Accounting => DashboardVariant::Accounting,
            RoleCategory::Construction => DashboardVariant::Construction,
            RoleCategory::Office => DashboardVariant::Office,
            RoleCategory::Aftercare => DashboardVariant::Aftercare,
            _ => DashboardVariant::Generic,
        }
    }
}

/// Whether the dashboard exposes the estimate-creation entry point.
/// Only the selling roles get it.
pub fn can_create_estimate(category: &RoleCategory) -> bool {
    matches!(
        category,
        RoleCategory::Sales | RoleCategory::Manager | RoleCategory::Executive
    )
}

/// The two estimate-creation flows the entry point offers. Selecting
/// one is a routing decision: the target pages are owned by the
/// estimate collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateFlow {
    Standard,
    Enhanced,
}

impl EstimateFlow {
    pub fn target_path(&self) -> &'static str {
        match self {
            EstimateFlow::Standard => "/estimates/create",
            EstimateFlow::Enhanced => "/estimates/create/enhanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_business_role_gets_its_own_dashboard() {
        assert_eq!(DashboardVariant::select(&RoleCategory::Sales), DashboardVariant::Sales);
        assert_eq!(DashboardVariant::select(&RoleCategory::Manager), DashboardVariant::Manager);
        assert_eq!(
            DashboardVariant::select(&RoleCategory::Aftercare),
            DashboardVariant::Aftercare
        );
    }

    #[test]
    fn admin_and_custom_fall_back_to_generic() {
        assert_eq!(DashboardVariant::select(&RoleCategory::Admin), DashboardVariant::Generic);
        assert_eq!(
            DashboardVariant::select(&RoleCategory::SuperAdmin),
            DashboardVariant::Generic
        );
        assert_eq!(
            DashboardVariant::select(&RoleCategory::Custom("現場監督補佐".into())),
            DashboardVariant::Generic
        );
    }

    #[test]
    fn estimate_entry_point_is_limited_to_selling_roles() {
        assert!(can_create_estimate(&RoleCategory::Sales));
        assert!(can_create_estimate(&RoleCategory::Manager));
        assert!(can_create_estimate(&RoleCategory::Executive));
        assert!(!can_create_estimate(&RoleCategory::Accounting));
        assert!(!can_create_estimate(&RoleCategory::Admin));
        assert!(!can_create_estimate(&RoleCategory::Custom("x".into())));
    }

    #[test]
    fn estimate_flows_route_to_the_collaborator_pages() {
        assert_eq!(EstimateFlow::Standard.target_path(), "/estimates/create");
        assert_eq!(EstimateFlow::Enhanced.target_path(), "/estimates/create/enhanced");
    }
}
