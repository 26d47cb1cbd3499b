//! SQLite implementation of AttributionStore.

use crate::storage::{AttributionStore, StorageError, UserTracking};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

/// SqliteStorage implements AttributionStore using SQLite.
pub struct SqliteStorage {
    pool: Pool<Sqlite>,
}

/// SqliteStorageConfig holds SQLite storage configuration.
#[derive(Debug, Clone)]
pub struct SqliteStorageConfig {
    /// Path to the SQLite database file.
    pub path: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
}

impl Default for SqliteStorageConfig {
    fn default() -> Self {
        Self {
            path: "tracking.db".to_string(),
            max_connections: 5,
        }
    }
}

impl SqliteStorage {
    /// Creates a new SQLite storage instance.
    pub async fn new(config: SqliteStorageConfig) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let storage = Self { pool };

        storage.migrate().await?;

        info!(path = %config.path, "SQLite storage initialized");
        Ok(storage)
    }

    /// Runs database migrations to create the schema.
    async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_tracking (
                user_id TEXT NOT NULL,
                bot_id TEXT NOT NULL,
                ip_address TEXT,
                src TEXT,
                sck TEXT,
                utm_source TEXT,
                utm_campaign TEXT,
                utm_medium TEXT,
                utm_content TEXT,
                utm_term TEXT,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (user_id, bot_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_user_tracking_bot ON user_tracking(bot_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AttributionStore for SqliteStorage {
    async fn get_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
    ) -> Result<Option<UserTracking>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT ip_address, src, sck, utm_source, utm_campaign,
                utm_medium, utm_content, utm_term
            FROM user_tracking WHERE user_id = ? AND bot_id = ?
            "#,
        )
        .bind(user_id)
        .bind(bot_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(UserTracking {
            ip_address: row.try_get("ip_address")?,
            src: row.try_get("src")?,
            sck: row.try_get("sck")?,
            utm_source: row.try_get("utm_source")?,
            utm_campaign: row.try_get("utm_campaign")?,
            utm_medium: row.try_get("utm_medium")?,
            utm_content: row.try_get("utm_content")?,
            utm_term: row.try_get("utm_term")?,
        }))
    }

    async fn save_user_tracking(
        &self,
        user_id: &str,
        bot_id: &str,
        tracking: &UserTracking,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO user_tracking (
                user_id, bot_id, ip_address, src, sck,
                utm_source, utm_campaign, utm_medium, utm_content, utm_term
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(user_id, bot_id) DO UPDATE SET
                ip_address = excluded.ip_address,
                src = excluded.src,
                sck = excluded.sck,
                utm_source = excluded.utm_source,
                utm_campaign = excluded.utm_campaign,
                utm_medium = excluded.utm_medium,
                utm_content = excluded.utm_content,
                utm_term = excluded.utm_term
            "#,
        )
        .bind(user_id)
        .bind(bot_id)
        .bind(&tracking.ip_address)
        .bind(&tracking.src)
        .bind(&tracking.sck)
        .bind(&tracking.utm_source)
        .bind(&tracking.utm_campaign)
        .bind(&tracking.utm_medium)
        .bind(&tracking.utm_content)
        .bind(&tracking.utm_term)
        .execute(&self.pool)
        .await?;

        debug!(user_id = %user_id, bot_id = %bot_id, "User tracking saved");

        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.pool.close().await;
        Ok(())
    }
}
