use crate::core::error::StoreError;
use crate::models::user::User;
use crate::stores::user_store::{UpdateOutcome, UserStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Store whose every operation fails, standing in for a lost connection
pub struct FailingUserStore;

fn unreachable_backend() -> StoreError {
    StoreError::Backend("server selection timeout".to_string())
}

#[async_trait]
impl UserStore for FailingUserStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }

    async fn find_one(&self, _id: ObjectId) -> Result<Option<User>, StoreError> {
        Err(unreachable_backend())
    }

    async fn insert_one(&self, _user: &User) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }

    async fn update_one(&self, _user: &User) -> Result<UpdateOutcome, StoreError> {
        Err(unreachable_backend())
    }

    async fn delete_one(&self, _id: ObjectId) -> Result<u64, StoreError> {
        Err(unreachable_backend())
    }
}
