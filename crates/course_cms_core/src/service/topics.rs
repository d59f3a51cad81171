//! crates/course_cms_core/src/service/topics.rs

use std::sync::Arc;

use tracing::info;

use crate::domain::Topic;
use crate::oid::ObjectId;
use crate::ports::TopicStore;
use crate::service::ServiceError;

/// Topic operations over an injected store handle.
#[derive(Clone)]
pub struct TopicService {
    store: Arc<dyn TopicStore>,
}

impl TopicService {
    pub fn new(store: Arc<dyn TopicStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Topic>, ServiceError> {
        let stored = self.store.find_all().await?;
        info!("listed {} topics", stored.len());
        Ok(stored.into_iter().map(|s| s.doc.into_api(s.id)).collect())
    }

    pub async fn get(&self, topic_id: &str) -> Result<Topic, ServiceError> {
        let id = ObjectId::parse_str(topic_id)?;
        let doc = self.store.find_by_id(id).await?;
        Ok(doc.into_api(id))
    }

    /// Creates the topic and returns the identifier storage assigned to it,
    /// in its hex rendering.
    pub async fn create(&self, topic: &Topic) -> Result<String, ServiceError> {
        let id = self.store.insert(&topic.to_doc()).await?;
        info!(topic_id = %id, "created topic");
        Ok(id.to_hex())
    }

    /// Replaces every mutable field of the stored topic. Whole-record
    /// overwrite, not a patch merge.
    pub async fn update(&self, topic_id: &str, topic: &Topic) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(topic_id)?;
        self.store.update(id, &topic.to_doc()).await?;
        info!(topic_id = %id, "updated topic");
        Ok(())
    }

    pub async fn delete(&self, topic_id: &str) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(topic_id)?;
        self.store.delete(id).await?;
        info!(topic_id = %id, "deleted topic");
        Ok(())
    }

    /// Marks the topic hidden. Hiding never deletes and is idempotent.
    pub async fn hide(&self, topic_id: &str) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(topic_id)?;
        self.store.hide(id).await?;
        info!(topic_id = %id, "hid topic");
        Ok(())
    }
}
