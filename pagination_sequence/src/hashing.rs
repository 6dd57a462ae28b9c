/// Pagination Kernel — Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 fingerprint of a
/// pagination sequence. Byte-identical across platforms.
///
/// Rules:
///   - format_version first, then items in sequence order
///   - page items:     {"type":"page","page":N}
///   - ellipsis items: {"type":"ellipsis","position":"start"|"end"}
///   - UTF-8 JSON, no whitespace, no float

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::PaginationItem;
use crate::SEQUENCE_FORMAT_VERSION;

/// Canonical serialization of a sequence to UTF-8 JSON bytes.
pub fn canonical_serialize(items: &[PaginationItem]) -> Vec<u8> {
    build_canonical_value(items).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn sequence_hash(items: &[PaginationItem]) -> String {
    let digest = Sha256::digest(canonical_serialize(items));
    digest.iter().map(|b| format!("{:02x}", b)).collect::<String>()
}

/// Build the canonical value in strict field order.
/// `serde_json::Map` preserves insertion order (`preserve_order`).
fn build_canonical_value(items: &[PaginationItem]) -> Value {
    let list: Vec<Value> = items.iter().map(item_value).collect();

    let mut root = Map::new();
    root.insert(
        "format_version".to_string(),
        Value::Number(SEQUENCE_FORMAT_VERSION.into()),
    );
    root.insert("items".to_string(), Value::Array(list));
    Value::Object(root)
}

fn item_value(item: &PaginationItem) -> Value {
    let mut map = Map::new();
    match item {
        PaginationItem::Page { page } => {
            map.insert("type".to_string(), Value::String("page".to_string()));
            map.insert("page".to_string(), Value::Number((*page).into()));
        }
        PaginationItem::Ellipsis { position } => {
            map.insert("type".to_string(), Value::String("ellipsis".to_string()));
            map.insert(
                "position".to_string(),
                Value::String(position.as_str().to_string()),
            );
        }
    }
    Value::Object(map)
}
