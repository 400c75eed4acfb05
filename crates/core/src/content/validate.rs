/// Aggregate validation run before handing an item to a persistence
/// adapter.
use thiserror::Error;

use super::item::ContentItem;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content item id cannot be empty")]
    EmptyId,
    #[error("content item type cannot be empty")]
    EmptyType,
    #[error("block {index} has an empty id")]
    EmptyBlockId { index: usize },
    #[error("block {index} has an empty kind")]
    EmptyBlockKind { index: usize },
}

/// Check that an item carries the minimum fields persistence relies on.
pub fn validate_item_fields(item: &ContentItem) -> Result<(), ValidationError> {
    if item.id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if item.item_type.is_empty() {
        return Err(ValidationError::EmptyType);
    }
    for (index, block) in item.blocks.iter().enumerate() {
        if block.id.is_empty() {
            return Err(ValidationError::EmptyBlockId { index });
        }
        if block.kind.is_empty() {
            return Err(ValidationError::EmptyBlockKind { index });
        }
    }
    Ok(())
}
