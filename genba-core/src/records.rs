//! Record DTOs for the customer and inventory services.
//!
//! These mirror the wire contracts of the external CRUD
//! collaborators. The partial-update forms accept any subset of the
//! full record's fields plus the required identifier, matching the
//! services' patch semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer record as served by the customer service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub tenant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Sales rep this customer is assigned to (email).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update payload for a customer: any field subset plus the
/// required id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateCustomer {
    /// Apply the provided fields onto an existing record.
    pub fn apply_to(&self, record: &mut Customer) {
        if let Some(v) = &self.name {
            record.name = v.clone();
        }
        if let Some(v) = &self.email {
            record.email = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            record.phone = Some(v.clone());
        }
        if let Some(v) = &self.address {
            record.address = Some(v.clone());
        }
        if let Some(v) = &self.assigned_to {
            record.assigned_to = Some(v.clone());
        }
        if let Some(v) = &self.notes {
            record.notes = Some(v.clone());
        }
        record.updated_at = Utc::now();
    }
}

/// An inventory record as served by the inventory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub tenant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update payload for an inventory item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryItem {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UpdateInventoryItem {
    pub fn apply_to(&self, record: &mut InventoryItem) {
        if let Some(v) = &self.name {
            record.name = v.clone();
        }
        if let Some(v) = &self.category {
            record.category = Some(v.clone());
        }
        if let Some(v) = self.quantity {
            record.quantity = v;
        }
        if let Some(v) = &self.unit {
            record.unit = Some(v.clone());
        }
        if let Some(v) = self.unit_price {
            record.unit_price = Some(v);
        }
        if let Some(v) = &self.location {
            record.location = Some(v.clone());
        }
        record.updated_at = Utc::now();
    }
}
