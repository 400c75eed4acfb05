//! Schema lifecycle management for the content collection.

use serde_json::Value;

use crate::error::{WeaviateError, WeaviateResult};
use crate::schema::{content_item_schema, schemas_match, validate_class_name, SchemaDefinition};
use crate::store::{StoreError, WeaviateStore};

pub const DEFAULT_CLASS_NAME: &str = "ContentItem";

/// Keeps the external store's schema for one collection in line with the
/// canonical `ContentItem` definition.
///
/// Stateless between calls: every operation re-reads the store, so
/// concurrent creators racing on the same class are arbitrated by the
/// store itself (the loser surfaces [`WeaviateError::SchemaAlreadyExists`]).
#[derive(Debug)]
pub struct SchemaManager<S> {
    store: S,
    class_name: String,
}

impl<S: WeaviateStore> SchemaManager<S> {
    /// Build a manager for `class_name`, rejecting names the store would
    /// refuse before any call is made.
    pub fn new(store: S, class_name: impl Into<String>) -> WeaviateResult<Self> {
        let class_name = class_name.into();
        validate_class_name(&class_name)?;
        Ok(Self { store, class_name })
    }

    /// Manager for the default `ContentItem` class.
    pub fn with_default_class(store: S) -> Self {
        Self {
            store,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Create the canonical schema.
    ///
    /// Fails with [`WeaviateError::SchemaAlreadyExists`] when the schema is
    /// already present, whether observed by the up-front existence check or
    /// reported as a conflict by the store after a lost race.
    pub async fn create_schema(&self) -> WeaviateResult<()> {
        if self.schema_exists(None).await? {
            return Err(WeaviateError::SchemaAlreadyExists {
                class_name: self.class_name.clone(),
            });
        }

        let definition = content_item_schema(&self.class_name);
        match self.store.create_schema(&definition).await {
            Ok(()) => {
                tracing::info!(class = %self.class_name, "schema created");
                Ok(())
            }
            Err(StoreError::Conflict(_)) => Err(WeaviateError::SchemaAlreadyExists {
                class_name: self.class_name.clone(),
            }),
            Err(e) => Err(WeaviateError::SchemaCreationFailed {
                class_name: self.class_name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Delete the schema. Idempotent: an absent schema is success and makes
    /// no delete call.
    pub async fn delete_schema(&self) -> WeaviateResult<()> {
        if !self.schema_exists(None).await? {
            tracing::debug!(class = %self.class_name, "schema absent, nothing to delete");
            return Ok(());
        }

        match self.store.delete_schema(&self.class_name).await {
            Ok(_) => {
                tracing::info!(class = %self.class_name, "schema deleted");
                Ok(())
            }
            Err(e) => Err(WeaviateError::SchemaDeletionFailed {
                class_name: self.class_name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Whether a schema exists, for the configured class or an override.
    pub async fn schema_exists(&self, class_name: Option<&str>) -> WeaviateResult<bool> {
        let class = class_name.unwrap_or(&self.class_name);
        self.store
            .schema_exists(class)
            .await
            .map_err(|e| WeaviateError::query_failed("schema_exists", e))
    }

    /// Structurally compare the stored schema against the canonical one.
    ///
    /// Fails with [`WeaviateError::SchemaNotFound`] when absent; a stored
    /// definition that does not even parse compares as `false` rather than
    /// erroring.
    pub async fn validate_schema(&self) -> WeaviateResult<bool> {
        if !self.schema_exists(None).await? {
            return Err(WeaviateError::SchemaNotFound {
                class_name: self.class_name.clone(),
            });
        }

        let value = self
            .store
            .get_schema(&self.class_name)
            .await
            .map_err(|e| WeaviateError::SchemaValidationFailed {
                class_name: self.class_name.clone(),
                reason: e.to_string(),
            })?;
        let Some(value) = value else {
            // Deleted between the existence check and the fetch.
            return Err(WeaviateError::SchemaNotFound {
                class_name: self.class_name.clone(),
            });
        };

        let expected = content_item_schema(&self.class_name);
        Ok(match SchemaDefinition::from_value(&value) {
            Some(current) => schemas_match(&current, &expected),
            None => false,
        })
    }

    /// Fetch the stored definition; `Ok(None)` when the schema is absent.
    pub async fn get_schema(&self) -> WeaviateResult<Option<SchemaDefinition>> {
        if !self.schema_exists(None).await? {
            return Ok(None);
        }

        let value: Option<Value> = self
            .store
            .get_schema(&self.class_name)
            .await
            .map_err(|e| WeaviateError::query_failed("get_schema", e))?;
        match value {
            Some(value) => SchemaDefinition::from_value(&value)
                .map(Some)
                .ok_or_else(|| {
                    WeaviateError::invalid_response(
                        "get_schema",
                        format!("schema payload for \"{}\" has an unexpected shape", self.class_name),
                    )
                }),
            None => Ok(None),
        }
    }
}
