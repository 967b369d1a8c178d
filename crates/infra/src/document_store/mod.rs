//! Single-document storage boundary.
//!
//! Handlers see only the `DocumentStore` trait; the concrete store (Postgres in
//! production, in-memory in tests) is chosen once at startup and injected.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use r#trait::{DocumentStore, StoreError, WriteResult};
