use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::block::Block;

/// The content aggregate root.
///
/// `id` and `created_at` are fixed at creation; `updated_at` refreshes on
/// mutation. Block order is meaningful and must survive persistence intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    /// Free-form classification, e.g. `"article"`.
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

impl ContentItem {
    /// Create a new aggregate with a fresh id; both timestamps get the same
    /// creation instant.
    pub fn create(
        item_type: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        blocks: Vec<Block>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            item_type: item_type.into(),
            title: title.into(),
            summary: summary.into(),
            created_at: now,
            updated_at: now,
            blocks,
        }
    }

    /// Reassemble an aggregate from already-known fields.
    ///
    /// Used by persistence hydration and test fixtures in place of the
    /// invariant-enforcing `create` constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: impl Into<String>,
        item_type: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        blocks: Vec<Block>,
    ) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            title: title.into(),
            summary: summary.into(),
            created_at,
            updated_at,
            blocks,
        }
    }

    /// Number of blocks currently owned by the aggregate.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Replace the block list, refreshing `updated_at`. Identity and
    /// `created_at` are untouched.
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_stamps_matching_timestamps() {
        let item = ContentItem::create("article", "Title", "Summary", vec![]);
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(item.block_count(), 0);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn with_blocks_keeps_identity_and_refreshes_updated_at() {
        let item = ContentItem::create("article", "Title", "Summary", vec![]);
        let id = item.id.clone();
        let created = item.created_at;

        let item = item.with_blocks(vec![Block::markdown("hello world")]);

        assert_eq!(item.id, id);
        assert_eq!(item.created_at, created);
        assert!(item.updated_at >= created);
        assert_eq!(item.block_count(), 1);
    }

    #[test]
    fn from_parts_preserves_every_field() {
        let created = Utc::now();
        let updated = Utc::now();
        let blocks = vec![Block::markdown("a b c")];
        let item = ContentItem::from_parts(
            "item-1",
            "note",
            "T",
            "S",
            created,
            updated,
            blocks.clone(),
        );
        assert_eq!(item.id, "item-1");
        assert_eq!(item.item_type, "note");
        assert_eq!(item.created_at, created);
        assert_eq!(item.updated_at, updated);
        assert_eq!(item.blocks, blocks);
    }
}
