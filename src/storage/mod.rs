//! Storage interfaces and implementations for user attribution data.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::{SqliteStorage, SqliteStorageConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// UserTracking is the attribution record captured when a user first
/// interacted with the bot. Every field is optional; whatever was present
/// on the entry link is what got stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTracking {
    pub ip_address: Option<String>,
    pub src: Option<String>,
    pub sck: Option<String>,
    pub utm_source: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_content: Option<String>,
    pub utm_term: Option<String>,
}

/// AttributionStore defines the interface for persisting and looking up
/// per-user attribution data, keyed by (user_id, bot_id).
#[async_trait]
pub trait AttributionStore: Send + Sync {
    /// Retrieves the attribution record for a user/bot pair.
    /// A missing record is Ok(None), never an error.
    async fn get_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
    ) -> Result<Option<UserTracking>, StorageError>;

    /// Saves (upserts) the attribution record for a user/bot pair.
    async fn save_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
        tracking: &UserTracking,
    ) -> Result<(), StorageError>;

    /// Close closes the storage connection.
    async fn close(&self) -> Result<(), StorageError>;
}

/// StorageError represents errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
