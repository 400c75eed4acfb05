//! Thin CRUD facade over the store's object API.
//!
//! Orchestration only: the schema is expected to exist (see
//! [`crate::SchemaManager`]) and all conversion goes through
//! [`crate::mapper`].

use chrono::{DateTime, Utc};
use portable_content_core::{validate_item_fields, ContentItem};
use serde_json::Value;

use crate::error::{WeaviateError, WeaviateResult};
use crate::mapper;
use crate::schema::validate_class_name;
use crate::store::{ObjectFilter, WeaviateStore};

/// Operations this repository actually supports. Vector similarity search
/// is intentionally absent.
const CAPABILITIES: &[&str] = &[
    "save",
    "find_by_id",
    "find_all",
    "find_by_type",
    "find_by_date_range",
    "delete",
    "count",
    "exists",
];

#[derive(Debug)]
pub struct ContentRepository<S> {
    store: S,
    class_name: String,
}

impl<S: WeaviateStore> ContentRepository<S> {
    pub fn new(store: S, class_name: impl Into<String>) -> WeaviateResult<Self> {
        let class_name = class_name.into();
        validate_class_name(&class_name)?;
        Ok(Self { store, class_name })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Persist an aggregate, replacing any object stored under its id.
    pub async fn save(&self, item: &ContentItem) -> WeaviateResult<()> {
        validate_item_fields(item)
            .map_err(|e| WeaviateError::data_mapping("save", e))?;
        let object = mapper::to_store_object(item)?;
        self.store
            .put_object(&self.class_name, &item.id, object)
            .await
            .map_err(|e| WeaviateError::query_failed("save", e))?;
        tracing::debug!(class = %self.class_name, id = %item.id, "content item saved");
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> WeaviateResult<Option<ContentItem>> {
        let object = self
            .store
            .get_object(&self.class_name, id)
            .await
            .map_err(|e| WeaviateError::query_failed("find_by_id", e))?;
        object.as_ref().map(mapper::from_store_object).transpose()
    }

    pub async fn find_all(&self, limit: usize, offset: usize) -> WeaviateResult<Vec<ContentItem>> {
        let objects = self
            .store
            .query_objects(&self.class_name, None, limit, offset)
            .await
            .map_err(|e| WeaviateError::query_failed("find_all", e))?;
        mapper::from_store_objects(&objects)
    }

    /// Items whose `type` field equals `item_type`, in insertion order.
    pub async fn find_by_type(
        &self,
        item_type: &str,
        limit: usize,
        offset: usize,
    ) -> WeaviateResult<Vec<ContentItem>> {
        let filter_value = Value::String(item_type.to_string());
        let objects = self
            .store
            .query_objects(
                &self.class_name,
                Some(ObjectFilter::Eq("type", &filter_value)),
                limit,
                offset,
            )
            .await
            .map_err(|e| WeaviateError::query_failed("find_by_type", e))?;
        mapper::from_store_objects(&objects)
    }

    /// Items whose `createdAt` falls inside `[start, end]`, in insertion
    /// order.
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> WeaviateResult<Vec<ContentItem>> {
        let filter = ObjectFilter::DateRange {
            field: "createdAt",
            start,
            end,
        };
        let objects = self
            .store
            .query_objects(&self.class_name, Some(filter), usize::MAX, 0)
            .await
            .map_err(|e| WeaviateError::query_failed("find_by_date_range", e))?;
        mapper::from_store_objects(&objects)
    }

    /// Delete by id. Idempotent: deleting an absent item is success.
    pub async fn delete(&self, id: &str) -> WeaviateResult<()> {
        let removed = self
            .store
            .delete_object(&self.class_name, id)
            .await
            .map_err(|e| WeaviateError::query_failed("delete", e))?;
        if removed {
            tracing::debug!(class = %self.class_name, id = %id, "content item deleted");
        }
        Ok(())
    }

    pub async fn count(&self) -> WeaviateResult<u64> {
        self.store
            .count_objects(&self.class_name)
            .await
            .map_err(|e| WeaviateError::query_failed("count", e))
    }

    pub async fn exists(&self, id: &str) -> WeaviateResult<bool> {
        let object = self
            .store
            .get_object(&self.class_name, id)
            .await
            .map_err(|e| WeaviateError::query_failed("exists", e))?;
        Ok(object.is_some())
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        CAPABILITIES
    }

    pub fn supports(&self, capability: &str) -> bool {
        CAPABILITIES.contains(&capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn rejects_invalid_class_names() {
        let err = ContentRepository::new(InMemoryStore::new(), "bad-name").unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidClassName { .. }));
    }

    #[test]
    fn capability_reporting() {
        let repo = ContentRepository::new(InMemoryStore::new(), "ContentItem").unwrap();
        assert!(repo.supports("save"));
        assert!(repo.supports("find_by_type"));
        assert!(repo.supports("find_by_date_range"));
        assert!(!repo.supports("find_similar"));
        assert!(!repo.supports("search"));
    }
}
