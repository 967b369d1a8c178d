//! Postgres-backed document store.
//!
//! Documents live in a single `documents` table as JSONB, keyed by a UUIDv7 and
//! tagged with their collection name. Selectors are evaluated with JSONB
//! containment (`doc @> selector`), which gives the same equality semantics as
//! the in-memory store.

use std::sync::Arc;

use roster_core::Document;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use super::r#trait::{DocumentStore, StoreError, WriteResult};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: Arc<PgPool>,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect and make sure the backing table exists.
    ///
    /// Fails if the database is unreachable; callers treat that as fatal.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.ensure_table().await?;
        Ok(store)
    }

    async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id UUID PRIMARY KEY,
                collection TEXT NOT NULL,
                doc JSONB NOT NULL
            )
            "#,
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[instrument(skip(self, doc), err)]
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<WriteResult, StoreError> {
        let done = sqlx::query("INSERT INTO documents (id, collection, doc) VALUES ($1, $2, $3)")
            .bind(Uuid::now_v7())
            .bind(collection)
            .bind(Json(doc))
            .execute(&*self.pool)
            .await?;

        Ok(WriteResult::acknowledged(done.rows_affected()))
    }

    #[instrument(skip(self, selector, set), err)]
    async fn update_one(
        &self,
        collection: &str,
        selector: &Document,
        set: Document,
    ) -> Result<WriteResult, StoreError> {
        let done = sqlx::query(
            r#"
            UPDATE documents
            SET doc = doc || $3
            WHERE id = (
                SELECT id FROM documents
                WHERE collection = $1 AND doc @> $2
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(selector.clone()))
        .bind(Json(set))
        .execute(&*self.pool)
        .await?;

        Ok(WriteResult::acknowledged(done.rows_affected()))
    }

    #[instrument(skip(self, selector), err)]
    async fn delete_one(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<WriteResult, StoreError> {
        let done = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE id = (
                SELECT id FROM documents
                WHERE collection = $1 AND doc @> $2
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(selector.clone()))
        .execute(&*self.pool)
        .await?;

        Ok(WriteResult::acknowledged(done.rows_affected()))
    }

    #[instrument(skip(self, selector), err)]
    async fn find(
        &self,
        collection: &str,
        selector: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT doc FROM documents
            WHERE collection = $1 AND doc @> $2
            ORDER BY id
            "#,
        )
        .bind(collection)
        .bind(Json(selector.clone()))
        .fetch_all(&*self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                row.try_get::<Json<Document>, _>("doc")
                    .map(|Json(doc)| doc)
                    .map_err(StoreError::from)
            })
            .collect()
    }
}
