//! crates/course_cms_core/src/service/users.rs

use std::sync::Arc;

use tracing::info;

use crate::domain::User;
use crate::oid::ObjectId;
use crate::ports::UserStore;
use crate::service::ServiceError;

/// User CRUD over an injected store handle.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let stored = self.store.find_all().await?;
        info!("listed {} users", stored.len());
        Ok(stored.into_iter().map(|s| s.doc.into_api(s.id)).collect())
    }

    pub async fn get(&self, user_id: &str) -> Result<User, ServiceError> {
        let id = ObjectId::parse_str(user_id)?;
        let doc = self.store.find_by_id(id).await?;
        Ok(doc.into_api(id))
    }

    pub async fn create(&self, user: &User) -> Result<String, ServiceError> {
        let id = self.store.insert(&user.to_doc()).await?;
        info!(user_id = %id, "created user");
        Ok(id.to_hex())
    }

    pub async fn update(&self, user_id: &str, user: &User) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(user_id)?;
        self.store.update(id, &user.to_doc()).await?;
        info!(user_id = %id, "updated user");
        Ok(())
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(user_id)?;
        self.store.delete(id).await?;
        info!(user_id = %id, "deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil::MemStore;

    fn ada() -> User {
        User {
            id: None,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            kind: "student".to_string(),
            age: 30,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let store = Arc::new(MemStore::default());
        let service = UserService::new(store.clone());

        let id = service.create(&ada()).await.unwrap();
        let user = service.get(&id).await.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.id.as_deref(), Some(id.as_str()));

        let renamed = User {
            name: "Ada L.".to_string(),
            ..ada()
        };
        service.update(&id, &renamed).await.unwrap();
        assert_eq!(service.get(&id).await.unwrap().name, "Ada L.");

        service.delete(&id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_id_never_touches_storage() {
        let store = Arc::new(MemStore::default());
        let service = UserService::new(store.clone());

        assert!(service.get("bogus").await.is_err());
        assert!(service.update("bogus", &ada()).await.is_err());
        assert!(service.delete("bogus").await.is_err());
        assert_eq!(store.call_count(), 0);
    }
}
