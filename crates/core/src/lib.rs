//! `roster-core`: users resource domain.
//!
//! This crate contains **pure domain** pieces (no infrastructure concerns):
//! the document shape, the user field rules and the validation chains that
//! gate every write.

pub mod document;
pub mod error;
pub mod user;
pub mod validation;

pub use document::{Document, FormFields};
pub use error::{FieldError, FieldErrors};
pub use user::UserField;
pub use validation::{FieldValidator, Validated, ValidationChain};
