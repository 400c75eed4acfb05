//! In-process store used by the test suites and by callers that want the
//! adapter's behavior without a running backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{ObjectFilter, StoreError, StoreObject, WeaviateStore};
use crate::schema::SchemaDefinition;

#[derive(Debug, Default)]
struct Inner {
    schemas: HashMap<String, SchemaDefinition>,
    /// Per class, objects in insertion order so pagination is stable.
    objects: HashMap<String, Vec<(String, StoreObject)>>,
}

/// Mutex-guarded implementation of [`WeaviateStore`].
///
/// `create_schema` is atomic create-if-absent: of two racing creators one
/// wins and the other sees [`StoreError::Conflict`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another test thread panicked; the data
        // is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl WeaviateStore for InMemoryStore {
    async fn schema_exists(&self, class: &str) -> Result<bool, StoreError> {
        Ok(self.lock().schemas.contains_key(class))
    }

    async fn create_schema(&self, definition: &SchemaDefinition) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.schemas.contains_key(&definition.class) {
            return Err(StoreError::Conflict(definition.class.clone()));
        }
        inner
            .schemas
            .insert(definition.class.clone(), definition.clone());
        Ok(())
    }

    async fn get_schema(&self, class: &str) -> Result<Option<Value>, StoreError> {
        let inner = self.lock();
        match inner.schemas.get(class) {
            Some(definition) => serde_json::to_value(definition)
                .map(Some)
                .map_err(|e| StoreError::Backend(e.to_string())),
            None => Ok(None),
        }
    }

    async fn delete_schema(&self, class: &str) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        let existed = inner.schemas.remove(class).is_some();
        inner.objects.remove(class);
        Ok(existed)
    }

    async fn put_object(
        &self,
        class: &str,
        id: &str,
        properties: StoreObject,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if !inner.schemas.contains_key(class) {
            return Err(StoreError::NotFound(class.to_string()));
        }
        let objects = inner.objects.entry(class.to_string()).or_default();
        match objects.iter_mut().find(|(oid, _)| oid == id) {
            Some((_, existing)) => *existing = properties,
            None => objects.push((id.to_string(), properties)),
        }
        Ok(())
    }

    async fn get_object(&self, class: &str, id: &str) -> Result<Option<StoreObject>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .objects
            .get(class)
            .and_then(|objects| objects.iter().find(|(oid, _)| oid == id))
            .map(|(_, properties)| properties.clone()))
    }

    async fn delete_object(&self, class: &str, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        let Some(objects) = inner.objects.get_mut(class) else {
            return Ok(false);
        };
        let before = objects.len();
        objects.retain(|(oid, _)| oid != id);
        Ok(objects.len() < before)
    }

    async fn query_objects(
        &self,
        class: &str,
        filter: Option<ObjectFilter<'_>>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoreObject>, StoreError> {
        let inner = self.lock();
        let Some(objects) = inner.objects.get(class) else {
            return Ok(Vec::new());
        };
        Ok(objects
            .iter()
            .filter(|(_, properties)| matches_filter(properties, filter))
            .skip(offset)
            .take(limit)
            .map(|(_, properties)| properties.clone())
            .collect())
    }

    async fn count_objects(&self, class: &str) -> Result<u64, StoreError> {
        let inner = self.lock();
        Ok(inner.objects.get(class).map_or(0, |o| o.len()) as u64)
    }
}

fn matches_filter(properties: &StoreObject, filter: Option<ObjectFilter<'_>>) -> bool {
    match filter {
        None => true,
        Some(ObjectFilter::Eq(field, value)) => properties.get(field) == Some(value),
        Some(ObjectFilter::DateRange { field, start, end }) => properties
            .get(field)
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|t| t.with_timezone(&Utc))
            .is_some_and(|t| start <= t && t <= end),
    }
}
