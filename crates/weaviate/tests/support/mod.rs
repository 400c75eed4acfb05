//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use portable_content_core::{word_count, Block, ContentItem};

pub fn fixed_time(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 123_456_789).unwrap()
}

/// Markdown block with generated id and current timestamp.
pub fn markdown_block(source: &str) -> Block {
    Block::markdown(source)
}

/// Fully deterministic block, bypassing the generating constructor.
pub fn fixed_block(n: usize, source: &str) -> Block {
    Block::from_parts(
        format!("block-{n}"),
        "markdown",
        source,
        fixed_time(1_700_000_000 + n as i64),
        word_count(source),
    )
}

/// Default item: one markdown block, generated identity.
pub fn sample_item() -> ContentItem {
    ContentItem::create(
        "article",
        "Test Article",
        "This is a test article summary",
        vec![markdown_block(
            "# Test Content\n\nThis is test markdown content.",
        )],
    )
}

/// Item with `count` deterministic blocks.
pub fn item_with_blocks(count: usize) -> ContentItem {
    let blocks = (1..=count)
        .map(|n| fixed_block(n, &format!("# Block {n}\n\nContent for block {n}")))
        .collect();
    ContentItem::create("article", "Multi-block", "Several blocks", blocks)
}

/// Fully deterministic item, every field fixed.
pub fn fixed_item(id: &str) -> ContentItem {
    ContentItem::from_parts(
        id,
        "note",
        "Fixed title",
        "Fixed summary",
        fixed_time(1_600_000_000),
        fixed_time(1_600_000_100),
        vec![fixed_block(1, "one two three")],
    )
}
