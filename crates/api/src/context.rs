use std::sync::Arc;

use roster_core::document::doc_with;
use roster_core::{Document, UserField};

/// Identity the current request acts as.
///
/// Resolved per request by the identity middleware and consumed by the update
/// handlers to select the target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    username: Arc<str>,
}

impl CurrentUser {
    pub fn new(username: impl Into<Arc<str>>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Selector matching this user's document.
    pub fn selector(&self) -> Document {
        doc_with(UserField::Username.as_str(), self.username())
    }
}
