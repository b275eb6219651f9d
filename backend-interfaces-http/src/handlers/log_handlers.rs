use axum::extract::State;
use axum::Json;

use backend_application::queries::log_queries;
use backend_application::AppState;
use backend_domain::TrashEvent;

use crate::error::HttpError;

pub async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<TrashEvent>>, HttpError> {
    let rows = log_queries::list_logs(&state).await?;
    Ok(Json(rows))
}
