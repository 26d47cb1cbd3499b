mod config;
mod domain;
mod storage;
mod tracking;

use config::Config;
use domain::Plan;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use storage::{AttributionStore, MemoryStorage, SqliteStorage, SqliteStorageConfig, UserTracking};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};
use tracking::UtmifyTracker;

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Check for test mode
    if env::args().any(|arg| arg == "--test-order") {
        test_order_flow().await;
        return;
    }

    init_tracing(Some("info"));

    let config_path = parse_config_path();

    match Config::load(&config_path) {
        Ok(config) => {
            info!(
                config = %config_path,
                app = %config.app.name,
                utmify_enabled = config.utmify.enabled,
                "Configuration OK"
            );
            info!("Run with --test-order to send a sample order to the configured endpoint");
        }
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
        }
    }
}

/// Builds the attribution store declared in the config, falling back to an
/// in-memory store when storage is disabled.
async fn build_store(config: &Config) -> Option<Arc<dyn AttributionStore>> {
    let storage_config = config.storage.as_ref();
    let enabled = storage_config.map(|s| s.enabled).unwrap_or(false);

    if !enabled {
        info!("Attribution storage disabled, using in-memory store");
        return Some(Arc::new(MemoryStorage::new()));
    }

    let path = storage_config
        .and_then(|s| s.path.clone())
        .unwrap_or_else(|| SqliteStorageConfig::default().path);

    match SqliteStorage::new(SqliteStorageConfig {
        path,
        ..Default::default()
    })
    .await
    {
        Ok(storage) => Some(Arc::new(storage)),
        Err(e) => {
            error!(error = %e, "Failed to open attribution storage");
            None
        }
    }
}

/// Test function for the full order flow: waiting_payment followed by paid.
async fn test_order_flow() {
    let config_path = parse_config_path();
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    init_tracing(config.app.log_level.as_deref());

    let Some(store) = build_store(&config).await else {
        return;
    };

    // Seed a sample attribution record so the document carries UTM fields
    let tracking_record = UserTracking {
        utm_source: Some("smoke_test".to_string()),
        utm_campaign: Some("manual".to_string()),
        ..Default::default()
    };
    if let Err(e) = store
        .save_user_tracking("1000", "test_bot", &tracking_record)
        .await
    {
        error!(error = %e, "Failed to seed tracking record");
        return;
    }

    let tracker = match UtmifyTracker::from_config(&config, Arc::clone(&store)) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to create tracker");
            return;
        }
    };

    let plan = Plan::new("VIP", Decimal::from_str("29.90").unwrap_or_default());
    let order_id = format!("test_{}", chrono::Utc::now().timestamp());
    let created_at = tracking::utc_now();

    info!(order_id = %order_id, "Sending waiting_payment...");

    match tracker
        .create_waiting_payment("1000", "test_bot", &plan, &order_id)
        .await
    {
        Ok(data) => info!(response = %data, "waiting_payment accepted"),
        Err(e) => {
            error!(error = %e, "waiting_payment failed");
            return;
        }
    }

    info!(order_id = %order_id, "Sending paid update...");

    match tracker
        .update_to_paid("1000", "test_bot", &plan, &order_id, &created_at)
        .await
    {
        Ok(data) => info!(response = %data, "paid update accepted"),
        Err(e) => error!(error = %e, "paid update failed"),
    }

    let _ = store.close().await;

    info!("Test completed");
}
