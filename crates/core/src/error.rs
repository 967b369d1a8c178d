//! Validation error model.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// A single field that failed its validator.
///
/// Serialises to the `{location, param, value, msg}` shape clients already parse;
/// `value` is omitted when the field was absent.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{param}: {msg}")]
pub struct FieldError {
    pub location: &'static str,
    pub param: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub msg: String,
}

impl FieldError {
    pub fn body(param: impl Into<String>, value: Option<String>, msg: impl Into<String>) -> Self {
        Self {
            location: "body",
            param: param.into(),
            value,
            msg: msg.into(),
        }
    }
}

/// Field errors keyed by field name (first error per field wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: FieldError) {
        self.0.entry(err.param.clone()).or_insert(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
