use axum::response::{IntoResponse, Response};

use roster_core::{Document, FormFields, Validated, ValidationChain};

use crate::app::dto::ValidationErrorsBody;

/// Validation gate: run the chain and either forward the matched data or
/// answer `200` with the per-field errors.
pub fn gate(chain: &ValidationChain, fields: &FormFields) -> Result<Document, Response> {
    match chain.run(fields) {
        Validated::Matched(doc) => Ok(doc),
        Validated::Rejected(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "validation failed");
            Err(ValidationErrorsBody { errors }.into_response())
        }
    }
}
