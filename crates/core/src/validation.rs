//! Field validators and the chains that run them.
//!
//! A chain runs every validator it holds against the inbound form fields and
//! collects all outcomes before deciding; there is no short-circuit on the
//! first failure. The result is either the matched data (trimmed values of the
//! present, validated fields) or the per-field errors.

use serde_json::Value;

use crate::document::{Document, FormFields};
use crate::error::{FieldError, FieldErrors};
use crate::user::UserField;

/// Trim + check + message for one field, optionally mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    field: UserField,
    required: bool,
}

/// Outcome of a single validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Optional field not present in the request.
    Skipped,
    /// Present and valid; carries the trimmed value.
    Passed(String),
    Failed(FieldError),
}

impl FieldValidator {
    pub const fn new(field: UserField) -> Self {
        Self {
            field,
            required: false,
        }
    }

    /// Mark the field as mandatory: absence becomes a failure.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn field(&self) -> UserField {
        self.field
    }

    pub fn check(&self, input: &FormFields) -> FieldOutcome {
        let name = self.field.as_str();
        match input.get(name) {
            None if self.required => {
                FieldOutcome::Failed(FieldError::body(name, None, self.field.message()))
            }
            None => FieldOutcome::Skipped,
            Some(raw) => {
                let value = raw.trim();
                if self.field.accepts(value) {
                    FieldOutcome::Passed(value.to_string())
                } else {
                    FieldOutcome::Failed(FieldError::body(
                        name,
                        Some(value.to_string()),
                        self.field.message(),
                    ))
                }
            }
        }
    }
}

/// Result of running a chain: the gate decision input.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    Matched(Document),
    Rejected(FieldErrors),
}

impl Validated {
    pub fn is_matched(&self) -> bool {
        matches!(self, Validated::Matched(_))
    }
}

/// Ordered set of field validators for one route.
#[derive(Debug, Clone, Default)]
pub struct ValidationChain {
    validators: Vec<FieldValidator>,
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn run(&self, input: &FormFields) -> Validated {
        let mut matched = Document::new();
        let mut errors = FieldErrors::new();

        for validator in &self.validators {
            match validator.check(input) {
                FieldOutcome::Skipped => {}
                FieldOutcome::Passed(value) => {
                    matched.insert(validator.field().as_str().to_string(), Value::String(value));
                }
                FieldOutcome::Failed(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Validated::Matched(matched)
        } else {
            Validated::Rejected(errors)
        }
    }
}
