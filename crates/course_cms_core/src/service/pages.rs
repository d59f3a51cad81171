//! crates/course_cms_core/src/service/pages.rs

use std::sync::Arc;

use tracing::{debug, info};

use crate::content::PageKind;
use crate::domain::Page;
use crate::oid::ObjectId;
use crate::ports::PageStore;
use crate::service::ServiceError;

/// Page operations over an injected store handle.
///
/// Every operation takes the owning topic's identifier; it is parsed up
/// front so a malformed value fails before storage is touched, but it is
/// not cross-checked against the stored page's owner.
#[derive(Clone)]
pub struct PageService {
    store: Arc<dyn PageStore>,
}

impl PageService {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }

    pub async fn list_by_topic(&self, topic_id: &str) -> Result<Vec<Page>, ServiceError> {
        let owner = ObjectId::parse_str(topic_id)?;
        let stored = self.store.find_by_topic(owner).await?;
        info!(topic_id = %owner, "found {} pages", stored.len());
        Ok(stored.into_iter().map(|s| s.doc.into_api(s.id)).collect())
    }

    pub async fn get(&self, topic_id: &str, page_id: &str) -> Result<Page, ServiceError> {
        ObjectId::parse_str(topic_id)?;
        let id = ObjectId::parse_str(page_id)?;
        let doc = self.store.find_by_id(id).await?;
        Ok(doc.into_api(id))
    }

    /// Creates the page under the given topic and returns the identifier
    /// storage assigned to it. The path's topic identifier owns; any
    /// `topic_id` in the payload is overridden by it.
    pub async fn create(&self, topic_id: &str, page: &Page) -> Result<String, ServiceError> {
        if PageKind::from_tag(&page.kind).is_none() {
            debug!(kind = %page.kind, "unrecognized page type tag, storing as-is");
        }

        let mut page = page.clone();
        page.topic_id = topic_id.to_string();

        let doc = page.to_doc()?;
        let id = self.store.insert(&doc).await?;
        info!(page_id = %id, topic_id, "created page");
        Ok(id.to_hex())
    }

    /// Replaces every mutable field of the stored page. Whole-record
    /// overwrite, not a patch merge.
    pub async fn update(
        &self,
        topic_id: &str,
        page_id: &str,
        page: &Page,
    ) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(page_id)?;
        if PageKind::from_tag(&page.kind).is_none() {
            debug!(kind = %page.kind, "unrecognized page type tag, storing as-is");
        }

        let mut page = page.clone();
        page.topic_id = topic_id.to_string();
        let doc = page.to_doc()?;

        self.store.update(id, &doc).await?;
        info!(page_id = %id, topic_id, "updated page");
        Ok(())
    }

    pub async fn delete(&self, topic_id: &str, page_id: &str) -> Result<(), ServiceError> {
        ObjectId::parse_str(topic_id)?;
        let id = ObjectId::parse_str(page_id)?;
        self.store.delete(id).await?;
        info!(page_id = %id, topic_id, "deleted page");
        Ok(())
    }

    /// Marks the page hidden. Hiding never deletes and is idempotent.
    pub async fn hide(&self, topic_id: &str, page_id: &str) -> Result<(), ServiceError> {
        ObjectId::parse_str(topic_id)?;
        let id = ObjectId::parse_str(page_id)?;
        self.store.hide(id).await?;
        info!(page_id = %id, topic_id, "hid page");
        Ok(())
    }
}
