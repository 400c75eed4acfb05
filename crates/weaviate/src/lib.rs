//! Weaviate persistence adapter for portable content.
//!
//! Two components do the real work: [`SchemaManager`] owns the lifecycle of
//! the target collection's schema (idempotent creation, structural
//! validation, deletion) and [`mapper`] converts between the
//! `ContentItem` aggregate and the store's flat object representation.
//! Both talk to the backend only through the narrow
//! [`store::WeaviateStore`] capability trait; [`store::memory`] provides an
//! in-process implementation for tests.

pub mod config;
pub mod error;
pub mod manager;
pub mod mapper;
pub mod repository;
pub mod schema;
pub mod store;

pub use config::WeaviateConfig;
pub use error::{WeaviateError, WeaviateResult};
pub use manager::SchemaManager;
pub use repository::ContentRepository;
pub use schema::{content_item_schema, SchemaDefinition, SchemaProperty};
