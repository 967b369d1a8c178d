//! Infrastructure layer: document storage adapters.

pub mod document_store;

pub use document_store::{
    DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, StoreError, WriteResult,
};
