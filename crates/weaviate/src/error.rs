use thiserror::Error;

/// Errors raised by the Weaviate adapter.
///
/// Adapter errors are never re-wrapped: anything already of this type
/// surfacing from an inner call propagates unchanged, and only foreign
/// failures get translated at the adapter boundary with the original
/// message preserved as `reason`.
#[derive(Debug, Error)]
pub enum WeaviateError {
    #[error("failed to connect to Weaviate at {host}:{port}: {reason}")]
    ConnectionFailed {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("failed to create schema for class \"{class_name}\": {reason}")]
    SchemaCreationFailed { class_name: String, reason: String },

    #[error("schema validation failed for class \"{class_name}\": {reason}")]
    SchemaValidationFailed { class_name: String, reason: String },

    #[error("failed to delete schema for class \"{class_name}\": {reason}")]
    SchemaDeletionFailed { class_name: String, reason: String },

    #[error("schema for class \"{class_name}\" already exists")]
    SchemaAlreadyExists { class_name: String },

    #[error("schema for class \"{class_name}\" not found")]
    SchemaNotFound { class_name: String },

    #[error("Weaviate query failed for operation \"{operation}\": {reason}")]
    QueryFailed { operation: String, reason: String },

    #[error("invalid response from Weaviate for operation \"{operation}\": {reason}")]
    InvalidResponse { operation: String, reason: String },

    #[error("data mapping error during \"{operation}\": {reason}")]
    DataMapping { operation: String, reason: String },

    #[error("invalid class name \"{class_name}\": {reason}")]
    InvalidClassName { class_name: String, reason: String },

    #[error("Weaviate authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Weaviate operation \"{operation}\" timed out after {seconds} seconds")]
    Timeout { operation: String, seconds: u64 },

    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },
}

impl WeaviateError {
    pub(crate) fn query_failed(operation: &str, reason: impl ToString) -> Self {
        Self::QueryFailed {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn data_mapping(operation: &str, reason: impl ToString) -> Self {
        Self::DataMapping {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_response(operation: &str, reason: impl ToString) -> Self {
        Self::InvalidResponse {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the adapter.
pub type WeaviateResult<T> = Result<T, WeaviateError>;
