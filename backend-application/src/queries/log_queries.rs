use tracing::error;

use backend_domain::{LogQueryError, TrashEvent};

use crate::{AppError, AppState};

pub async fn list_logs(state: &AppState) -> Result<Vec<TrashEvent>, AppError> {
    state.metrics.record_log_request();
    state.event_repo.list_events().await.map_err(|err| {
        state.metrics.record_log_error();
        match err {
            LogQueryError::Query(ref cause) => {
                error!("Database connection or query failed: {:#}", cause);
                AppError::Internal(anyhow::Error::msg(err.to_string()))
            }
            config_err => {
                error!("log query rejected: {}", config_err);
                AppError::Config(config_err.to_string())
            }
        }
    })
}
