use crate::core::error::StoreError;
use crate::models::user::User;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Result of an update: how many records matched the filter and how many changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Collection-scoped access to user records.
///
/// Absence is reported as `Ok(None)` / zero counts, never as an error.
/// `StoreError` is reserved for transport and encoding failures.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short backend name used in logs and the health response
    fn backend(&self) -> &'static str;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Look up exactly one record by id equality
    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, StoreError>;

    async fn insert_one(&self, user: &User) -> Result<(), StoreError>;

    /// Set `name`, `gender` and `age` on the record whose id equals `user.id`.
    /// Does not check existence first and never touches the id.
    async fn update_one(&self, user: &User) -> Result<UpdateOutcome, StoreError>;

    /// Remove the record with this id, returning the number of records deleted
    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError>;
}
