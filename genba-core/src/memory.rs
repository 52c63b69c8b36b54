//! In-memory record service.
//!
//! A tenant-scoped, JSON-record implementation of [`CrudService`]
//! used by tests and by embedders that want the suite running before
//! the real customer/inventory services are wired in. Records are
//! plain JSON objects keyed by an `id` field; every operation only
//! sees the calling tenant's records.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::GenbaError;
use crate::service::CrudService;
use crate::tenant::TenantContext;

#[derive(Default)]
pub struct MemoryCrudService {
    // tenant id -> record id -> record
    records: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryCrudService {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_object(data: &Value) -> Result<&serde_json::Map<String, Value>> {
        data.as_object()
            .ok_or_else(|| GenbaError::bad_request("Record payload must be a JSON object").into_anyhow())
    }

    fn id_from(data: &Value) -> Option<String> {
        data.get("id").and_then(|v| v.as_str()).map(|s| s.to_string())
    }
}

#[async_trait]
impl CrudService<Value, ()> for MemoryCrudService {
    async fn find(&self, ctx: &TenantContext, _params: ()) -> Result<Vec<Value>> {
        let store = self.records.read().unwrap();
        Ok(store
            .get(ctx.tenant_id.as_str())
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(&self, ctx: &TenantContext, id: &str, _params: ()) -> Result<Value> {
        let store = self.records.read().unwrap();
        store
            .get(ctx.tenant_id.as_str())
            .and_then(|records| records.get(id))
            .cloned()
            .ok_or_else(|| GenbaError::not_found(format!("No record found for id '{id}'")).into_anyhow())
    }

    async fn create(&self, ctx: &TenantContext, data: Value, _params: ()) -> Result<Value> {
        Self::require_object(&data)?;

        let mut record = data;
        let id = Self::id_from(&record).unwrap_or_else(|| Uuid::new_v4().to_string());
        let obj = record.as_object_mut().unwrap();
        obj.insert("id".to_string(), Value::String(id.clone()));
        obj.insert(
            "tenantId".to_string(),
            Value::String(ctx.tenant_id.as_str().to_string()),
        );

        let mut store = self.records.write().unwrap();
        let records = store.entry(ctx.tenant_id.as_str().to_string()).or_default();
        if records.contains_key(&id) {
            return Err(GenbaError::conflict(format!("Record '{id}' already exists")).into_anyhow());
        }
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, ctx: &TenantContext, id: &str, data: Value, _params: ()) -> Result<Value> {
        Self::require_object(&data)?;

        let mut store = self.records.write().unwrap();
        let records = store
            .get_mut(ctx.tenant_id.as_str())
            .ok_or_else(|| GenbaError::not_found(format!("No record found for id '{id}'")).into_anyhow())?;
        if !records.contains_key(id) {
            return Err(GenbaError::not_found(format!("No record found for id '{id}'")).into_anyhow());
        }

        // Full replace, but the identifier and tenant scope are ours.
        let mut record = data;
        let obj = record.as_object_mut().unwrap();
        obj.insert("id".to_string(), Value::String(id.to_string()));
        obj.insert(
            "tenantId".to_string(),
            Value::String(ctx.tenant_id.as_str().to_string()),
        );
        records.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn patch(
        &self,
        ctx: &TenantContext,
        id: Option<&str>,
        data: Value,
        _params: (),
    ) -> Result<Value> {
        let fields = Self::require_object(&data)?.clone();

        // The identifier is required: either explicit or inside the payload.
        let id = match id {
            Some(id) => id.to_string(),
            None => Self::id_from(&data).ok_or_else(|| {
                GenbaError::bad_request("Partial update requires an 'id' field").into_anyhow()
            })?,
        };

        let mut store = self.records.write().unwrap();
        let record = store
            .get_mut(ctx.tenant_id.as_str())
            .and_then(|records| records.get_mut(&id))
            .ok_or_else(|| GenbaError::not_found(format!("No record found for id '{id}'")).into_anyhow())?;

        let obj = record.as_object_mut().unwrap();
        for (k, v) in fields {
            if k == "id" || k == "tenantId" {
                continue;
            }
            obj.insert(k, v);
        }
        Ok(record.clone())
    }

    async fn remove(&self, ctx: &TenantContext, id: Option<&str>, _params: ()) -> Result<Value> {
        let id = id.ok_or_else(|| {
            GenbaError::bad_request("Remove requires an id (multi remove is not supported)")
                .into_anyhow()
        })?;

        let mut store = self.records.write().unwrap();
        store
            .get_mut(ctx.tenant_id.as_str())
            .and_then(|records| records.remove(id))
            .ok_or_else(|| GenbaError::not_found(format!("No record found for id '{id}'")).into_anyhow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    fn kind_of(err: &anyhow::Error) -> ErrorKind {
        GenbaError::from_anyhow(err).expect("structured error").kind
    }

    #[tokio::test]
    async fn create_assigns_id_and_tenant() {
        let svc = MemoryCrudService::new();
        let ctx = TenantContext::new("t-1");
        let created = svc
            .create(&ctx, json!({ "name": "砂利 20kg" }), ())
            .await
            .unwrap();
        assert!(created["id"].is_string());
        assert_eq!(created["tenantId"], "t-1");
    }

    #[tokio::test]
    async fn records_are_tenant_scoped() {
        let svc = MemoryCrudService::new();
        let a = TenantContext::new("t-a");
        let b = TenantContext::new("t-b");

        let created = svc.create(&a, json!({ "name": "客A" }), ()).await.unwrap();
        let id = created["id"].as_str().unwrap();

        let err = svc.get(&b, id, ()).await.unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::NotFound);
        assert!(svc.find(&b, ()).await.unwrap().is_empty());
        assert_eq!(svc.find(&a, ()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn patch_merges_subset_and_requires_id() {
        let svc = MemoryCrudService::new();
        let ctx = TenantContext::new("t-1");
        let created = svc
            .create(&ctx, json!({ "name": "山田", "phone": "03-0000-0000" }), ())
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let patched = svc
            .patch(&ctx, None, json!({ "id": id, "phone": "03-1111-2222" }), ())
            .await
            .unwrap();
        assert_eq!(patched["phone"], "03-1111-2222");
        assert_eq!(patched["name"], "山田");

        let err = svc
            .patch(&ctx, None, json!({ "phone": "x" }), ())
            .await
            .unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn patch_cannot_move_record_across_tenants() {
        let svc = MemoryCrudService::new();
        let ctx = TenantContext::new("t-1");
        let created = svc.create(&ctx, json!({ "name": "x" }), ()).await.unwrap();
        let id = created["id"].as_str().unwrap();

        let patched = svc
            .patch(&ctx, Some(id), json!({ "tenantId": "t-evil" }), ())
            .await
            .unwrap();
        assert_eq!(patched["tenantId"], "t-1");
    }

    #[tokio::test]
    async fn remove_returns_the_removed_record() {
        let svc = MemoryCrudService::new();
        let ctx = TenantContext::new("t-1");
        let created = svc.create(&ctx, json!({ "name": "x" }), ()).await.unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let removed = svc.remove(&ctx, Some(&id), ()).await.unwrap();
        assert_eq!(removed["id"], id.as_str());

        let err = svc.get(&ctx, &id, ()).await.unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::NotFound);
    }
}
