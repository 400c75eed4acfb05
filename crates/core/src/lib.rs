//! Domain model for portable content: the `ContentItem` aggregate and its
//! ordered `Block` children. Persistence adapters map these types to and
//! from backend-specific representations.

pub mod content;

pub use content::block::{word_count, Block, MARKDOWN_KIND};
pub use content::item::ContentItem;
pub use content::validate::{validate_item_fields, ValidationError};
