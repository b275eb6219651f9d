use axum::routing::get;
use axum::Router;

use backend_application::AppState;

use crate::handlers::{dashboard_handlers, log_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_handlers::dashboard_page))
        .route("/api/logs", get(log_handlers::list_logs))
        .route("/api/dashboard", get(dashboard_handlers::dashboard_json))
        .route("/api/health/live", get(ops_handlers::health_live))
        .route("/api/health/ready", get(ops_handlers::health_ready))
        .route(
            "/api/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
