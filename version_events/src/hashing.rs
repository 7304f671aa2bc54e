/// Version Events v1 — Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 fingerprint of a
/// projected schedule.
///
/// Rules:
///   - Events in schedule order (already date-sorted, stable)
///   - Event fields in fixed order: date, event, version
///   - UTF-8 JSON, no whitespace, non-ASCII emitted unescaped

use sha2::{Digest, Sha256};
use serde_json::{Map, Value};

use crate::arithmetic::format_date;
use crate::domain::EventItem;
use crate::TABLE_VERSION;

/// Canonical serialization of a schedule to UTF-8 JSON bytes.
/// `table_version` is the first field for identity binding.
pub fn canonical_serialize(events: &[EventItem]) -> Vec<u8> {
    build_canonical_value(events).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(events: &[EventItem]) -> String {
    hex_digest(&canonical_serialize(events))
}

/// Lowercase hex SHA-256 of arbitrary bytes.
pub fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn build_canonical_value(events: &[EventItem]) -> Value {
    let list: Vec<Value> = events
        .iter()
        .map(|e| {
            let mut m = Map::new();
            m.insert("date".to_string(), Value::String(format_date(e.date)));
            m.insert("event".to_string(), Value::String(e.event.clone()));
            m.insert("version".to_string(), Value::String(e.version.to_string()));
            Value::Object(m)
        })
        .collect();

    let mut root = Map::new();
    root.insert(
        "table_version".to_string(),
        Value::Number((TABLE_VERSION as i64).into()),
    );
    root.insert("events".to_string(), Value::Array(list));
    Value::Object(root)
}
