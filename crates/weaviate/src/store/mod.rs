//! The capability boundary to the external store.
//!
//! `SchemaManager` and `ContentRepository` only ever talk to Weaviate
//! through [`WeaviateStore`]; transport, pooling and authentication live
//! behind it. [`memory`] ships an in-process implementation used by the
//! test suites.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::SchemaDefinition;

pub mod memory;

/// Flat, store-native representation of one persisted object.
pub type StoreObject = Map<String, Value>;

/// Filters accepted by [`WeaviateStore::query_objects`].
#[derive(Debug, Clone, Copy)]
pub enum ObjectFilter<'a> {
    /// Exact property equality.
    Eq(&'a str, &'a Value),
    /// Inclusive range over an RFC 3339 date property.
    DateRange {
        field: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Failures reported by a store implementation.
///
/// Typed so callers can tell a lost create race (`Conflict`) apart from a
/// transport or backend fault.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("class \"{0}\" already exists")]
    Conflict(String),

    #[error("class \"{0}\" not found")]
    NotFound(String),

    #[error("transport failure reaching {host}:{port}: {reason}")]
    Transport {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("{0}")]
    Backend(String),
}

/// The narrow surface the adapter consumes from the external store.
#[async_trait]
pub trait WeaviateStore: Send + Sync {
    async fn schema_exists(&self, class: &str) -> Result<bool, StoreError>;

    /// Create the schema for `definition.class`. Implementations should be
    /// atomic create-if-absent where the backend allows it, reporting
    /// [`StoreError::Conflict`] when the class is already present.
    async fn create_schema(&self, definition: &SchemaDefinition) -> Result<(), StoreError>;

    /// Fetch the current definition as the store returned it, or `None`
    /// when the class has no schema.
    async fn get_schema(&self, class: &str) -> Result<Option<Value>, StoreError>;

    /// Delete the schema and all of its objects. Returns whether anything
    /// was deleted.
    async fn delete_schema(&self, class: &str) -> Result<bool, StoreError>;

    /// Insert or replace the object stored under `id`.
    async fn put_object(
        &self,
        class: &str,
        id: &str,
        properties: StoreObject,
    ) -> Result<(), StoreError>;

    async fn get_object(&self, class: &str, id: &str) -> Result<Option<StoreObject>, StoreError>;

    /// Returns whether an object was present.
    async fn delete_object(&self, class: &str, id: &str) -> Result<bool, StoreError>;

    /// List objects in insertion order, optionally filtered, with
    /// offset/limit pagination.
    async fn query_objects(
        &self,
        class: &str,
        filter: Option<ObjectFilter<'_>>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoreObject>, StoreError>;

    async fn count_objects(&self, class: &str) -> Result<u64, StoreError>;
}
