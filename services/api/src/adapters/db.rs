//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete
//! implementation of the store ports from the `core` crate. Each collection
//! lives in a PostgreSQL table shaped like a document store: a 12-byte
//! binary identifier column plus a JSONB column holding the document form,
//! so the document field names the core mandates are preserved verbatim.
//! Pages additionally mirror their owner into a `topic_id` column for the
//! by-topic filter.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use course_cms_core::oid::ObjectId;
use course_cms_core::ports::{
    PageStore, StoreError, StoreResult, Stored, TopicStore, UserStore,
};
use course_cms_core::schema::{PageDoc, TopicDoc, UserDoc};

/// A database adapter that implements the store ports.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn unexpected(e: impl std::fmt::Display) -> StoreError {
    StoreError::Unexpected(e.to_string())
}

fn encode_doc<T: Serialize>(doc: &T) -> StoreResult<Value> {
    serde_json::to_value(doc).map_err(unexpected)
}

/// Decodes an `(id, doc)` row into the document form.
fn decode_row<T: DeserializeOwned>(row: &PgRow) -> StoreResult<Stored<T>> {
    let id_bytes: Vec<u8> = row.try_get("id").map_err(unexpected)?;
    let id_bytes: [u8; 12] = id_bytes
        .as_slice()
        .try_into()
        .map_err(|_| StoreError::Unexpected("stored id is not 12 bytes".to_string()))?;
    let id = ObjectId::from_bytes(id_bytes);

    let doc: Value = row.try_get("doc").map_err(unexpected)?;
    let doc = serde_json::from_value(doc).map_err(unexpected)?;
    Ok(Stored { id, doc })
}

#[async_trait]
impl TopicStore for DbAdapter {
    async fn find_all(&self) -> StoreResult<Vec<Stored<TopicDoc>>> {
        let rows = sqlx::query("SELECT id, doc FROM topics ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        rows.iter().map(decode_row).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<TopicDoc> {
        let row = sqlx::query("SELECT id, doc FROM topics WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| StoreError::NotFound(format!("topic {} not found", id)))?;
        Ok(decode_row::<TopicDoc>(&row)?.doc)
    }

    async fn insert(&self, doc: &TopicDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        sqlx::query("INSERT INTO topics (id, doc) VALUES ($1, $2)")
            .bind(id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(id)
    }

    async fn update(&self, id: ObjectId, doc: &TopicDoc) -> StoreResult<()> {
        sqlx::query("UPDATE topics SET doc = $2 WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<()> {
        sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn hide(&self, id: ObjectId) -> StoreResult<()> {
        sqlx::query("UPDATE topics SET doc = jsonb_set(doc, '{isHidden}', 'true'::jsonb) WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl PageStore for DbAdapter {
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<PageDoc> {
        let row = sqlx::query("SELECT id, doc FROM pages WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| StoreError::NotFound(format!("page {} not found", id)))?;
        Ok(decode_row::<PageDoc>(&row)?.doc)
    }

    async fn find_by_topic(&self, topic_id: ObjectId) -> StoreResult<Vec<Stored<PageDoc>>> {
        let rows = sqlx::query("SELECT id, doc FROM pages WHERE topic_id = $1 ORDER BY id")
            .bind(topic_id.as_bytes().as_slice())
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        rows.iter().map(decode_row).collect()
    }

    async fn insert(&self, doc: &PageDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        sqlx::query("INSERT INTO pages (id, topic_id, doc) VALUES ($1, $2, $3)")
            .bind(id.as_bytes().as_slice())
            .bind(doc.topic_id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(id)
    }

    async fn update(&self, id: ObjectId, doc: &PageDoc) -> StoreResult<()> {
        sqlx::query("UPDATE pages SET topic_id = $2, doc = $3 WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .bind(doc.topic_id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<()> {
        sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn hide(&self, id: ObjectId) -> StoreResult<()> {
        sqlx::query("UPDATE pages SET doc = jsonb_set(doc, '{isHidden}', 'true'::jsonb) WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for DbAdapter {
    async fn find_all(&self) -> StoreResult<Vec<Stored<UserDoc>>> {
        let rows = sqlx::query("SELECT id, doc FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;
        rows.iter().map(decode_row).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<UserDoc> {
        let row = sqlx::query("SELECT id, doc FROM users WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| StoreError::NotFound(format!("user {} not found", id)))?;
        Ok(decode_row::<UserDoc>(&row)?.doc)
    }

    async fn insert(&self, doc: &UserDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        sqlx::query("INSERT INTO users (id, doc) VALUES ($1, $2)")
            .bind(id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(id)
    }

    async fn update(&self, id: ObjectId, doc: &UserDoc) -> StoreResult<()> {
        sqlx::query("UPDATE users SET doc = $2 WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .bind(encode_doc(doc)?)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_bytes().as_slice())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }
}
