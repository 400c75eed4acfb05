//! Bidirectional mapping between the domain aggregate and the store's flat
//! object representation.
//!
//! Everything here is pure: no I/O, no store dependency. The central
//! contract is the round trip — `from_store_object(&to_store_object(x)?)`
//! reproduces `x` field for field, block order included.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use portable_content_core::{Block, ContentItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WeaviateError, WeaviateResult};
use crate::store::StoreObject;

/// Wire shape of one block inside the JSON-encoded `blocks` property.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBlock {
    block_id: String,
    kind: String,
    source: String,
    created_at: String,
    word_count: u64,
}

impl StoredBlock {
    fn from_block(block: &Block) -> Self {
        Self {
            block_id: block.id.clone(),
            kind: block.kind.clone(),
            source: block.source.clone(),
            created_at: block.created_at.to_rfc3339(),
            word_count: block.word_count as u64,
        }
    }

    fn into_block(self) -> WeaviateResult<Block> {
        let created_at = parse_datetime("createdAt", &self.created_at)?;
        Ok(Block::from_parts(
            self.block_id,
            self.kind,
            self.source,
            created_at,
            self.word_count as usize,
        ))
    }
}

/// Convert an aggregate into the eight-field store object.
///
/// `blockCount` is recomputed from the live block list, never trusted from
/// any stale field; `blocks` becomes a single JSON-encoded text value with
/// block order preserved.
pub fn to_store_object(item: &ContentItem) -> WeaviateResult<StoreObject> {
    let blocks: Vec<StoredBlock> = item.blocks.iter().map(StoredBlock::from_block).collect();
    let encoded = serde_json::to_string(&blocks)
        .map_err(|e| WeaviateError::data_mapping("serialization", e))?;

    let mut object = StoreObject::new();
    object.insert("contentId".into(), Value::String(item.id.clone()));
    object.insert("type".into(), Value::String(item.item_type.clone()));
    object.insert("title".into(), Value::String(item.title.clone()));
    object.insert("summary".into(), Value::String(item.summary.clone()));
    object.insert(
        "createdAt".into(),
        Value::String(item.created_at.to_rfc3339()),
    );
    object.insert(
        "updatedAt".into(),
        Value::String(item.updated_at.to_rfc3339()),
    );
    object.insert("blockCount".into(), Value::from(item.block_count() as u64));
    object.insert("blocks".into(), Value::String(encoded));
    Ok(object)
}

/// Inverse of [`to_store_object`].
///
/// Fails with `DataMapping("hydration", ..)` on any missing field, wrong
/// shape, or a `blocks` payload that does not decode into well-formed
/// block records.
pub fn from_store_object(object: &StoreObject) -> WeaviateResult<ContentItem> {
    let id = require_text(object, "contentId")?;
    let item_type = require_text(object, "type")?;
    let title = require_text(object, "title")?;
    let summary = require_text(object, "summary")?;
    let created_at = parse_datetime("createdAt", require_text(object, "createdAt")?)?;
    let updated_at = parse_datetime("updatedAt", require_text(object, "updatedAt")?)?;

    // Shape check only; the count itself is re-derived from the block list.
    object
        .get("blockCount")
        .and_then(Value::as_u64)
        .ok_or_else(|| hydration_error("field \"blockCount\" is missing or not a non-negative integer"))?;

    let encoded = require_text(object, "blocks")?;
    let stored: Vec<StoredBlock> = serde_json::from_str(encoded)
        .map_err(|e| hydration_error(format!("field \"blocks\" failed to decode: {e}")))?;
    let blocks = stored
        .into_iter()
        .map(StoredBlock::into_block)
        .collect::<WeaviateResult<Vec<Block>>>()?;

    Ok(ContentItem::from_parts(
        id, item_type, title, summary, created_at, updated_at, blocks,
    ))
}

/// Map one block to its store record (`id` travels as `blockId`).
pub fn block_to_store_object(block: &Block) -> WeaviateResult<StoreObject> {
    let value = serde_json::to_value(StoredBlock::from_block(block))
        .map_err(|e| WeaviateError::data_mapping("serialization", e))?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(WeaviateError::data_mapping(
            "serialization",
            "block did not serialize to an object",
        )),
    }
}

/// Inverse of [`block_to_store_object`].
pub fn store_object_to_block(object: &StoreObject) -> WeaviateResult<Block> {
    let stored: StoredBlock = serde_json::from_value(Value::Object(object.clone()))
        .map_err(|e| hydration_error(format!("block record failed to decode: {e}")))?;
    stored.into_block()
}

/// Batch form of [`to_store_object`]; order-preserving, all-or-nothing.
pub fn to_store_objects(items: &[ContentItem]) -> WeaviateResult<Vec<StoreObject>> {
    items.iter().map(to_store_object).collect()
}

/// Batch form of [`from_store_object`]; the first failing element aborts
/// the whole batch with its error.
pub fn from_store_objects(objects: &[StoreObject]) -> WeaviateResult<Vec<ContentItem>> {
    objects.iter().map(from_store_object).collect()
}

/// Structural predicate over a raw store object. Never errors: any defect
/// (missing field, wrong type, unparseable timestamp, malformed `blocks`
/// payload) just answers `false`.
pub fn validate_store_object(object: &StoreObject) -> bool {
    let text_ok = |field: &str| object.get(field).is_some_and(Value::is_string);
    let date_ok = |field: &str| {
        object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
    };

    text_ok("contentId")
        && text_ok("type")
        && text_ok("title")
        && text_ok("summary")
        && date_ok("createdAt")
        && date_ok("updatedAt")
        && object.get("blockCount").is_some_and(|v| v.as_u64().is_some())
        && object
            .get("blocks")
            .and_then(Value::as_str)
            .is_some_and(|encoded| {
                serde_json::from_str::<Vec<StoredBlock>>(encoded)
                    .map(|stored| {
                        stored
                            .iter()
                            .all(|b| DateTime::parse_from_rfc3339(&b.created_at).is_ok())
                    })
                    .unwrap_or(false)
            })
}

/// The canonical field-name-to-type mapping, the same eight entries as the
/// schema definition's properties. Lets callers self-check a record without
/// depending on the schema manager.
pub fn expected_store_structure() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("contentId", "text"),
        ("type", "text"),
        ("title", "text"),
        ("summary", "text"),
        ("createdAt", "date"),
        ("updatedAt", "date"),
        ("blockCount", "int"),
        ("blocks", "text"),
    ])
}

fn require_text<'a>(object: &'a StoreObject, field: &str) -> WeaviateResult<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| hydration_error(format!("field \"{field}\" is missing or not a string")))
}

fn parse_datetime(field: &str, raw: &str) -> WeaviateResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| hydration_error(format!("field \"{field}\" is not a valid timestamp: {e}")))
}

fn hydration_error(reason: impl ToString) -> WeaviateError {
    WeaviateError::data_mapping("hydration", reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> ContentItem {
        let blocks = vec![
            Block::markdown("# First\n\nsome words here"),
            Block::markdown("second block"),
        ];
        ContentItem::create("article", "A title", "A summary", blocks)
    }

    #[test]
    fn store_object_carries_the_eight_canonical_fields() {
        let item = sample_item();
        let object = to_store_object(&item).unwrap();

        let expected = expected_store_structure();
        assert_eq!(object.len(), expected.len());
        for field in expected.keys() {
            assert!(object.contains_key(*field), "missing field {field}");
        }
        assert_eq!(object.get("blockCount"), Some(&json!(2)));
        assert_eq!(object.get("contentId"), Some(&json!(item.id)));
    }

    #[test]
    fn block_count_is_recomputed_not_trusted() {
        let item = sample_item().with_blocks(vec![]);
        let object = to_store_object(&item).unwrap();
        assert_eq!(object.get("blockCount"), Some(&json!(0)));
        assert_eq!(object.get("blocks"), Some(&json!("[]")));
    }

    #[test]
    fn round_trips_a_single_block() {
        let block = Block::markdown("héllo wörld — 日本語");
        let object = block_to_store_object(&block).unwrap();
        assert_eq!(object.get("blockId"), Some(&json!(block.id)));
        assert_eq!(object.get("kind"), Some(&json!("markdown")));

        let back = store_object_to_block(&object).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn hydration_fails_on_missing_field() {
        let mut object = to_store_object(&sample_item()).unwrap();
        object.remove("title");

        let err = from_store_object(&object).unwrap_err();
        assert!(matches!(err, WeaviateError::DataMapping { .. }));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn hydration_fails_on_bad_timestamp() {
        let mut object = to_store_object(&sample_item()).unwrap();
        object.insert("createdAt".into(), json!("yesterday"));

        let err = from_store_object(&object).unwrap_err();
        assert!(err.to_string().contains("createdAt"));
    }

    #[test]
    fn hydration_fails_on_malformed_blocks_payload() {
        let mut object = to_store_object(&sample_item()).unwrap();
        object.insert("blocks".into(), json!("not json"));
        assert!(from_store_object(&object).is_err());

        // valid JSON, wrong element shape
        object.insert("blocks".into(), json!("[{\"kind\":\"markdown\"}]"));
        assert!(from_store_object(&object).is_err());
    }

    #[test]
    fn validate_accepts_the_mapped_shape() {
        let object = to_store_object(&sample_item()).unwrap();
        assert!(validate_store_object(&object));
    }

    #[test]
    fn validate_rejects_each_structural_defect() {
        let good = to_store_object(&sample_item()).unwrap();

        let mut missing = good.clone();
        missing.remove("summary");
        assert!(!validate_store_object(&missing));

        let mut wrong_type = good.clone();
        wrong_type.insert("title".into(), json!(42));
        assert!(!validate_store_object(&wrong_type));

        let mut negative_count = good.clone();
        negative_count.insert("blockCount".into(), json!(-1));
        assert!(!validate_store_object(&negative_count));

        let mut bad_date = good.clone();
        bad_date.insert("updatedAt".into(), json!("not-a-date"));
        assert!(!validate_store_object(&bad_date));

        let mut bad_blocks = good.clone();
        bad_blocks.insert("blocks".into(), json!("{\"not\":\"an array\"}"));
        assert!(!validate_store_object(&bad_blocks));

        let mut bad_block_date = good;
        bad_block_date.insert(
            "blocks".into(),
            json!(
                "[{\"blockId\":\"b\",\"kind\":\"markdown\",\"source\":\"x\",\
                 \"createdAt\":\"nope\",\"wordCount\":1}]"
            ),
        );
        assert!(!validate_store_object(&bad_block_date));
    }

    #[test]
    fn expected_structure_matches_the_schema_properties() {
        let structure = expected_store_structure();
        let schema = crate::schema::content_item_schema("ContentItem");
        assert_eq!(structure.len(), schema.properties.len());
        for property in &schema.properties {
            assert_eq!(
                structure.get(property.name.as_str()),
                Some(&property.data_type[0].as_str()),
                "mismatch for {}",
                property.name
            );
        }
    }
}
