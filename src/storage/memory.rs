//! In-memory implementation of AttributionStore for tests and local runs.

use crate::storage::{AttributionStore, StorageError, UserTracking};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// MemoryStorage keeps attribution records in a HashMap keyed by
/// (user_id, bot_id). Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<(String, String), UserTracking>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttributionStore for MemoryStorage {
    async fn get_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
    ) -> Result<Option<UserTracking>, StorageError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(user_id.to_string(), bot_id.to_string()))
            .cloned())
    }

    async fn save_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
        tracking: &UserTracking,
    ) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(
            (user_id.to_string(), bot_id.to_string()),
            tracking.clone(),
        );
        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
