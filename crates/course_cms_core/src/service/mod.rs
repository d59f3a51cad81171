//! crates/course_cms_core/src/service/mod.rs
//!
//! Application services for topics, pages, and users. Each service owns a
//! constructor-injected store handle, translates between the API and
//! document forms through the mapper in `schema`, and parses every
//! caller-supplied identifier before touching storage.

mod pages;
mod topics;
mod users;

pub use pages::PageService;
pub use topics::TopicService;
pub use users::UserService;

use crate::oid::IdentifierError;
use crate::ports::StoreError;

/// Errors a service operation can produce: either the caller supplied a
/// malformed identifier, or the store itself failed. Both surface verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
pub(crate) mod testutil {
    //! An in-memory store used by the service tests. Counts every call so
    //! tests can assert that invalid identifiers never reach storage.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::oid::ObjectId;
    use crate::ports::{
        PageStore, StoreError, StoreResult, Stored, TopicStore, UserStore,
    };
    use crate::schema::{PageDoc, TopicDoc, UserDoc};

    #[derive(Default)]
    pub struct MemStore {
        pub topics: Mutex<Vec<Stored<TopicDoc>>>,
        pub pages: Mutex<Vec<Stored<PageDoc>>>,
        pub users: Mutex<Vec<Stored<UserDoc>>>,
        pub calls: AtomicUsize,
    }

    impl MemStore {
        fn touch(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn seed_topic(&self, id: ObjectId, doc: TopicDoc) {
            self.topics.lock().unwrap().push(Stored { id, doc });
        }
    }

    fn not_found(what: &str, id: ObjectId) -> StoreError {
        StoreError::NotFound(format!("{what} {id} not found"))
    }

    #[async_trait]
    impl TopicStore for MemStore {
        async fn find_all(&self) -> StoreResult<Vec<Stored<TopicDoc>>> {
            self.touch();
            Ok(self.topics.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: ObjectId) -> StoreResult<TopicDoc> {
            self.touch();
            self.topics
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.doc.clone())
                .ok_or_else(|| not_found("topic", id))
        }

        async fn insert(&self, doc: &TopicDoc) -> StoreResult<ObjectId> {
            self.touch();
            let id = ObjectId::new();
            self.topics.lock().unwrap().push(Stored {
                id,
                doc: doc.clone(),
            });
            Ok(id)
        }

        async fn update(&self, id: ObjectId, doc: &TopicDoc) -> StoreResult<()> {
            self.touch();
            let mut topics = self.topics.lock().unwrap();
            match topics.iter_mut().find(|s| s.id == id) {
                Some(stored) => {
                    stored.doc = doc.clone();
                    Ok(())
                }
                None => Err(not_found("topic", id)),
            }
        }

        async fn delete(&self, id: ObjectId) -> StoreResult<()> {
            self.touch();
            self.topics.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }

        async fn hide(&self, id: ObjectId) -> StoreResult<()> {
            self.touch();
            let mut topics = self.topics.lock().unwrap();
            match topics.iter_mut().find(|s| s.id == id) {
                Some(stored) => {
                    stored.doc.hidden = true;
                    Ok(())
                }
                None => Err(not_found("topic", id)),
            }
        }
    }

    #[async_trait]
    impl PageStore for MemStore {
        async fn find_by_id(&self, id: ObjectId) -> StoreResult<PageDoc> {
            self.touch();
            self.pages
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.doc.clone())
                .ok_or_else(|| not_found("page", id))
        }

        async fn find_by_topic(
            &self,
            topic_id: ObjectId,
        ) -> StoreResult<Vec<Stored<PageDoc>>> {
            self.touch();
            Ok(self
                .pages
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.doc.topic_id == topic_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, doc: &PageDoc) -> StoreResult<ObjectId> {
            self.touch();
            let id = ObjectId::new();
            self.pages.lock().unwrap().push(Stored {
                id,
                doc: doc.clone(),
            });
            Ok(id)
        }

        async fn update(&self, id: ObjectId, doc: &PageDoc) -> StoreResult<()> {
            self.touch();
            let mut pages = self.pages.lock().unwrap();
            match pages.iter_mut().find(|s| s.id == id) {
                Some(stored) => {
                    stored.doc = doc.clone();
                    Ok(())
                }
                None => Err(not_found("page", id)),
            }
        }

        async fn delete(&self, id: ObjectId) -> StoreResult<()> {
            self.touch();
            self.pages.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }

        async fn hide(&self, id: ObjectId) -> StoreResult<()> {
            self.touch();
            let mut pages = self.pages.lock().unwrap();
            match pages.iter_mut().find(|s| s.id == id) {
                Some(stored) => {
                    stored.doc.hidden = true;
                    Ok(())
                }
                None => Err(not_found("page", id)),
            }
        }
    }

    #[async_trait]
    impl UserStore for MemStore {
        async fn find_all(&self) -> StoreResult<Vec<Stored<UserDoc>>> {
            self.touch();
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: ObjectId) -> StoreResult<UserDoc> {
            self.touch();
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.doc.clone())
                .ok_or_else(|| not_found("user", id))
        }

        async fn insert(&self, doc: &UserDoc) -> StoreResult<ObjectId> {
            self.touch();
            let id = ObjectId::new();
            self.users.lock().unwrap().push(Stored {
                id,
                doc: doc.clone(),
            });
            Ok(id)
        }

        async fn update(&self, id: ObjectId, doc: &UserDoc) -> StoreResult<()> {
            self.touch();
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|s| s.id == id) {
                Some(stored) => {
                    stored.doc = doc.clone();
                    Ok(())
                }
                None => Err(not_found("user", id)),
            }
        }

        async fn delete(&self, id: ObjectId) -> StoreResult<()> {
            self.touch();
            self.users.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }
}
