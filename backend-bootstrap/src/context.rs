use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use backend_application::AppState;
use backend_infrastructure::{require_db_config, AppConfig, MySqlEventRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(allow_missing_db_config: bool) -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_settings = config.to_db_settings();

        match require_db_config(&db_settings) {
            Ok(db) => info!(
                host = %db.host,
                port = db.port,
                database = %db.database,
                relaxed_tls = db.accept_invalid_certs,
                time_zone = ?db.time_zone,
                "database configured"
            ),
            Err(err) if allow_missing_db_config && err.is_config() => {
                warn!("{}; /api/logs will fail until it is set", err)
            }
            Err(err) => return Err(err.into()),
        }

        // Settings are re-checked on every query.
        let repo = Arc::new(MySqlEventRepository::new(db_settings));
        let state = AppState::new(runtime_config, repo);

        Ok(Self { state })
    }
}
