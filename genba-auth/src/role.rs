//! Role resolution.
//!
//! User roles arrive as free-form strings: either the localized
//! business titles the suite ships with (経営者, 営業担当, ...) or
//! their English slugs. Resolution is total: anything unrecognized
//! becomes [`RoleCategory::Custom`] and the label passes through
//! unchanged for display.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Canonical role category behind a raw role label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Executive,
    Manager,
    Sales,
    Accounting,
    Marketing,
    Construction,
    Office,
    Aftercare,
    SuperAdmin,
    Admin,
    /// Unrecognized label, kept verbatim for display.
    Custom(String),
}

impl RoleCategory {
    /// Map a raw role label to its canonical category.
    ///
    /// Pure and total: both the localized business titles and their
    /// English slugs resolve; every other input falls through to
    /// `Custom` with the label preserved.
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "経営者" | "executive" => RoleCategory::Executive,
            "支店長" | "manager" => RoleCategory::Manager,
            "営業担当" | "sales" => RoleCategory::Sales,
            "経理担当" | "accounting" => RoleCategory::Accounting,
            "マーケティング" | "marketing" => RoleCategory::Marketing,
            "施工管理" | "construction" => RoleCategory::Construction,
            "事務員" | "office" => RoleCategory::Office,
            "アフター担当" | "aftercare" => RoleCategory::Aftercare,
            "super_admin" => RoleCategory::SuperAdmin,
            "admin" => RoleCategory::Admin,
            other => {
                debug!(role = %other, "unrecognized role label, using custom category");
                RoleCategory::Custom(other.to_string())
            }
        }
    }

    /// Human-readable dashboard title for this category.
    ///
    /// Custom labels pass through unchanged; categories without a
    /// dedicated dashboard fall back to the generic title.
    pub fn display_title(&self) -> String {
        match self {
            RoleCategory::Sales => "営業ダッシュボード".to_string(),
            RoleCategory::Manager => "支店長ダッシュボード".to_string(),
            RoleCategory::Marketing => "マーケティングダッシュボード".to_string(),
            RoleCategory::Accounting => "経理ダッシュボード".to_string(),
            RoleCategory::Executive => "経営ダッシュボード".to_string(),
            RoleCategory::Construction => "施工管理ダッシュボード".to_string(),
            RoleCategory::Office => "事務ダッシュボード".to_string(),
            RoleCategory::Aftercare => "アフターサービスダッシュボード".to_string(),
            RoleCategory::Custom(label) => label.clone(),
            _ => "ダッシュボード".to_string(),
        }
    }

    /// Color theme key the frontend applies to this category's
    /// dashboard chrome.
    pub fn theme_key(&self) -> &'static str {
        match self {
            RoleCategory::Sales => "from-dandori-orange to-dandori-yellow",
            RoleCategory::Manager => "from-dandori-blue to-dandori-sky",
            RoleCategory::Marketing => "from-dandori-yellow to-green-400",
            RoleCategory::Accounting => "from-purple-500 to-dandori-pink",
            RoleCategory::Executive => "from-dandori-blue to-dandori-sky",
            RoleCategory::Construction => "from-orange-500 to-red-500",
            RoleCategory::Office => "from-purple-500 to-pink-500",
            RoleCategory::Aftercare => "from-cyan-500 to-blue-500",
            _ => "from-gray-600 to-gray-700",
        }
    }
}
