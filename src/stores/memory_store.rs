use crate::core::error::StoreError;
use crate::models::user::User;
use crate::stores::user_store::{UpdateOutcome, UserStore};
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

/// In-memory user store with the same semantics as the MongoDB collection
pub struct MemoryUserStore {
    users: DashMap<ObjectId, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert_one(&self, user: &User) -> Result<(), StoreError> {
        // Mirrors the unique index on _id
        if self.users.contains_key(&user.id) {
            return Err(StoreError::Backend(format!(
                "duplicate key: {}",
                user.id.to_hex()
            )));
        }

        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_one(&self, user: &User) -> Result<UpdateOutcome, StoreError> {
        let Some(mut entry) = self.users.get_mut(&user.id) else {
            return Ok(UpdateOutcome::default());
        };

        let stored = entry.value_mut();
        let changed =
            stored.name != user.name || stored.gender != user.gender || stored.age != user.age;

        stored.name = user.name.clone();
        stored.gender = user.gender.clone();
        stored.age = user.age;

        Ok(UpdateOutcome {
            matched: 1,
            modified: changed as u64,
        })
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError> {
        Ok(self.users.remove(&id).map_or(0, |_| 1))
    }
}
