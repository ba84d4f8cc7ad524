use crate::core::config::DatabaseConfig;
use crate::core::error::StoreError;
use crate::models::user::User;
use crate::stores::user_store::{UpdateOutcome, UserStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// On-disk shape of a user document
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    gender: String,
    age: i64,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            gender: user.gender.clone(),
            age: user.age,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User::new(doc.id, doc.name, doc.gender, doc.age)
    }
}

/// User store backed by a MongoDB collection
pub struct MongoUserStore {
    database: Database,
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Build a client for `config.uri`. No I/O happens until the first operation.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .context(format!("Invalid MongoDB URI: {}", config.uri))?;

        let timeout = Duration::from_secs(config.connect_timeout);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)
            .context("Failed to create MongoDB client")?;

        Ok(Self::new(&client, &config.name, &config.collection))
    }

    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<UserDocument>(collection);

        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(User::from))
    }

    async fn insert_one(&self, user: &User) -> Result<(), StoreError> {
        self.collection.insert_one(UserDocument::from(user)).await?;
        Ok(())
    }

    async fn update_one(&self, user: &User) -> Result<UpdateOutcome, StoreError> {
        let update = doc! {
            "$set": {
                "name": user.name.as_str(),
                "gender": user.gender.as_str(),
                "age": user.age,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": user.id }, update)
            .await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
