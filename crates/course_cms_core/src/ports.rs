//! crates/course_cms_core/src/ports.rs
//!
//! Defines the storage contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete document store behind them.
//!
//! Stores operate on the document form of each entity plus its identifier.
//! Inserts assign and return a fresh identifier; updates replace the whole
//! document under an existing one.

use async_trait::async_trait;

use crate::oid::ObjectId;
use crate::schema::{PageDoc, TopicDoc, UserDoc};

/// A generic error type for all store operations.
///
/// Store faults are passed through the core unmodified; the core never
/// reinterprets or retries them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("an unexpected storage error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// A document together with the identifier storage keeps it under.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: ObjectId,
    pub doc: T,
}

#[async_trait]
pub trait TopicStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Stored<TopicDoc>>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<TopicDoc>;

    /// Inserts the document and returns the identifier assigned to it.
    async fn insert(&self, doc: &TopicDoc) -> StoreResult<ObjectId>;

    /// Replaces the whole document stored under `id`.
    async fn update(&self, id: ObjectId, doc: &TopicDoc) -> StoreResult<()>;

    async fn delete(&self, id: ObjectId) -> StoreResult<()>;

    /// Flips the document's hidden flag to true, leaving every other field
    /// untouched. Idempotent.
    async fn hide(&self, id: ObjectId) -> StoreResult<()>;
}

#[async_trait]
pub trait PageStore: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<PageDoc>;

    async fn find_by_topic(&self, topic_id: ObjectId) -> StoreResult<Vec<Stored<PageDoc>>>;

    async fn insert(&self, doc: &PageDoc) -> StoreResult<ObjectId>;

    async fn update(&self, id: ObjectId, doc: &PageDoc) -> StoreResult<()>;

    async fn delete(&self, id: ObjectId) -> StoreResult<()>;

    async fn hide(&self, id: ObjectId) -> StoreResult<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Stored<UserDoc>>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<UserDoc>;

    async fn insert(&self, doc: &UserDoc) -> StoreResult<ObjectId>;

    async fn update(&self, id: ObjectId, doc: &UserDoc) -> StoreResult<()>;

    async fn delete(&self, id: ObjectId) -> StoreResult<()>;
}
