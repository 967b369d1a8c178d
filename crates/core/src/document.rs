//! Document and form-field shapes shared by the validation and storage layers.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A stored document (JSON object). Selectors and update sets use the same shape.
pub type Document = Map<String, Value>;

/// Raw inbound form fields, keyed by field name.
pub type FormFields = BTreeMap<String, String>;

/// Build a single-key document, e.g. a `{username: ...}` selector.
pub fn doc_with(key: &str, value: impl Into<String>) -> Document {
    let mut doc = Document::new();
    doc.insert(key.to_string(), Value::String(value.into()));
    doc
}

/// Equality containment: every key of `selector` is present in `doc` with an equal value.
///
/// An empty selector matches every document.
pub fn matches_selector(doc: &Document, selector: &Document) -> bool {
    selector
        .iter()
        .all(|(k, v)| doc.get(k).is_some_and(|stored| stored == v))
}
