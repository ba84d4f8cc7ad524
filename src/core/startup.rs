use anyhow::{bail, Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::core::config::DatabaseConfig;
use crate::stores::memory_store::MemoryUserStore;
use crate::stores::mongo_store::MongoUserStore;
use crate::stores::user_store::UserStore;

// this runs at boot time
pub async fn connect_store(config: &DatabaseConfig) -> Result<Arc<dyn UserStore>> {
    let store: Arc<dyn UserStore> = match config.backend.as_str() {
        "mongodb" => Arc::new(MongoUserStore::connect(config).await?),
        "memory" => Arc::new(MemoryUserStore::new()),
        other => bail!("Unsupported database backend '{}'", other),
    };

    verify_connection(store.as_ref(), Duration::from_secs(config.connect_timeout)).await?;

    info!(
        backend = store.backend(),
        database = %config.name,
        collection = %config.collection,
        "User store ready"
    );

    Ok(store)
}

/// Ping the store once, failing if it errors or does not answer within `deadline`
pub async fn verify_connection(store: &dyn UserStore, deadline: Duration) -> Result<()> {
    match tokio::time::timeout(deadline, store.ping()).await {
        Ok(result) => result.context(format!("Failed to ping {} store", store.backend())),
        Err(_) => bail!(
            "Timed out after {}s waiting for {} store",
            deadline.as_secs(),
            store.backend()
        ),
    }
}
