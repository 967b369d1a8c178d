use std::collections::HashMap;
use std::sync::RwLock;

use roster_core::Document;
use roster_core::document::matches_selector;
use uuid::Uuid;

use super::r#trait::{DocumentStore, StoreError, WriteResult};

/// In-memory document store.
///
/// Intended for tests/dev. Collections are created on first insert.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<(Uuid, Document)>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("in-memory store lock poisoned".to_string())
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<WriteResult, StoreError> {
        let mut map = self.collections.write().map_err(|_| Self::poisoned())?;
        map.entry(collection.to_string())
            .or_default()
            .push((Uuid::now_v7(), doc));
        Ok(WriteResult::acknowledged(1))
    }

    async fn update_one(
        &self,
        collection: &str,
        selector: &Document,
        set: Document,
    ) -> Result<WriteResult, StoreError> {
        let mut map = self.collections.write().map_err(|_| Self::poisoned())?;
        let Some(docs) = map.get_mut(collection) else {
            return Ok(WriteResult::acknowledged(0));
        };

        match docs.iter_mut().find(|(_, d)| matches_selector(d, selector)) {
            Some((_, doc)) => {
                for (k, v) in set {
                    doc.insert(k, v);
                }
                Ok(WriteResult::acknowledged(1))
            }
            None => Ok(WriteResult::acknowledged(0)),
        }
    }

    async fn delete_one(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<WriteResult, StoreError> {
        let mut map = self.collections.write().map_err(|_| Self::poisoned())?;
        let Some(docs) = map.get_mut(collection) else {
            return Ok(WriteResult::acknowledged(0));
        };

        match docs.iter().position(|(_, d)| matches_selector(d, selector)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(WriteResult::acknowledged(1))
            }
            None => Ok(WriteResult::acknowledged(0)),
        }
    }

    async fn find(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        let map = self.collections.read().map_err(|_| Self::poisoned())?;
        Ok(map
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, d)| matches_selector(d, selector))
                    .map(|(_, d)| d.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}
