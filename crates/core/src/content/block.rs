use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The only block kind handled in the current scope.
pub const MARKDOWN_KIND: &str = "markdown";

/// An ordered, owned sub-unit of a `ContentItem`'s content.
///
/// Blocks have no lifecycle of their own; they exist only inside the
/// aggregate that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    /// Kind discriminator, e.g. `"markdown"`.
    pub kind: String,
    /// Raw textual content.
    pub source: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Derived from `source` at construction time.
    #[serde(rename = "wordCount")]
    pub word_count: usize,
}

impl Block {
    /// Create a markdown block with a fresh id and creation timestamp.
    pub fn markdown(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            id: Uuid::new_v4().to_string(),
            kind: MARKDOWN_KIND.to_string(),
            word_count: word_count(&source),
            source,
            created_at: Utc::now(),
        }
    }

    /// Reassemble a block from already-known fields.
    ///
    /// Used by persistence hydration and test fixtures; no derivation or
    /// timestamping happens here.
    pub fn from_parts(
        id: impl Into<String>,
        kind: impl Into<String>,
        source: impl Into<String>,
        created_at: DateTime<Utc>,
        word_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            source: source.into(),
            created_at,
            word_count,
        }
    }
}

/// Count whitespace-separated tokens in `source`.
pub fn word_count(source: &str) -> usize {
    source.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_derives_word_count() {
        // The "#" marker is a whitespace-separated token of its own.
        let block = Block::markdown("# Title\n\nSome body text here.");
        assert_eq!(block.kind, MARKDOWN_KIND);
        assert_eq!(block.word_count, 6);
        assert!(!block.id.is_empty());

        let plain = Block::markdown("Some body text here.");
        assert_eq!(plain.word_count, 4);
    }

    #[test]
    fn word_count_handles_unicode_and_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t\n  "), 0);
        assert_eq!(word_count("héllo wörld"), 2);
        assert_eq!(word_count("日本語 テキスト です"), 3);
    }

    #[test]
    fn from_parts_preserves_every_field() {
        let at = Utc::now();
        let block = Block::from_parts("b-1", "markdown", "text", at, 1);
        assert_eq!(block.id, "b-1");
        assert_eq!(block.created_at, at);
        assert_eq!(block.word_count, 1);
    }
}
