//! JSON-LD structured-data extraction.
//!
//! Pulls embedded `application/ld+json` blocks out of a parsed document and
//! flattens them into a list of entities. Top-level arrays and `@graph`
//! containers are unwrapped; unparseable blocks are skipped, never fatal.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;

use crate::domain::StructuredDataEntity;

static JSON_LD_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("static selector must parse")
});

/// Extract every JSON-LD entity embedded in the document.
pub fn extract_entities(document: &Html) -> Vec<StructuredDataEntity> {
    let mut entities = Vec::new();

    for script in document.select(&JSON_LD_SEL) {
        let raw = script.text().collect::<String>();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => {
                for item in items {
                    push_entity(&mut entities, item);
                }
            }
            Ok(value) => push_entity(&mut entities, value),
            Err(err) => {
                tracing::debug!("skipping unparseable JSON-LD block: {err}");
            }
        }
    }

    entities
}

fn push_entity(entities: &mut Vec<StructuredDataEntity>, value: Value) {
    // A lone @graph wrapper contributes its members, not itself
    if let Value::Object(ref obj) = value {
        if let Some(Value::Array(graph)) = obj.get("@graph") {
            entities.extend(graph.iter().cloned());
            return;
        }
    }
    entities.push(value);
}

/// The type designator an entity declares. When `@type` is a list, only the
/// first element is consulted; the rest are ignored.
pub fn entity_type(entity: &Value) -> Option<&str> {
    match entity.get("@type")? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.first().and_then(Value::as_str),
        _ => None,
    }
}
