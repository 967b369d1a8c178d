use std::sync::Arc;

use roster_core::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acknowledgement of a single-document write.
///
/// `n` counts the documents the write applied to. For updates this is the number
/// of documents *matched* by the selector, so rewriting a field with the value it
/// already holds still reports `n == 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    pub n: u64,
    pub ok: u8,
}

impl WriteResult {
    pub fn acknowledged(n: u64) -> Self {
        Self { n, ok: 1 }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.ok == 1
    }

    /// Exactly one document written and the write acknowledged.
    pub fn is_single(&self) -> bool {
        self.is_acknowledged() && self.n == 1
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Single-document operations over named collections.
///
/// Selectors use equality containment: a document matches when every key of
/// the selector is present with an equal value. Each call is one independent
/// write; there are no transactions spanning calls.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<WriteResult, StoreError>;

    /// Overwrite the fields in `set` on the first document matching `selector`.
    async fn update_one(
        &self,
        collection: &str,
        selector: &Document,
        set: Document,
    ) -> Result<WriteResult, StoreError>;

    async fn delete_one(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<WriteResult, StoreError>;

    /// All documents matching `selector`, in insertion order.
    async fn find(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<Vec<Document>, StoreError>;
}

#[async_trait::async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<WriteResult, StoreError> {
        (**self).insert_one(collection, doc).await
    }

    async fn update_one(
        &self,
        collection: &str,
        selector: &Document,
        set: Document,
    ) -> Result<WriteResult, StoreError> {
        (**self).update_one(collection, selector, set).await
    }

    async fn delete_one(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<WriteResult, StoreError> {
        (**self).delete_one(collection, selector).await
    }

    async fn find(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        (**self).find(collection, selector).await
    }
}
