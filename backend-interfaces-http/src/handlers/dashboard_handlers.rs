use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use chrono::Local;
use serde::Deserialize;

use backend_application::queries::dashboard_queries;
use backend_application::AppState;
use backend_domain::DashboardView;

use crate::pages::render_dashboard;

/// `?page=N`. Kept as text so a malformed value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_number(&self) -> Option<usize> {
        self.page.as_deref()?.trim().parse().ok()
    }
}

pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let view = dashboard_queries::dashboard_view(&state, query.page_number()).await;
    Html(render_dashboard(
        &view,
        state.config.refresh_interval_seconds,
        &Local,
    ))
}

pub async fn dashboard_json(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<DashboardView> {
    Json(dashboard_queries::dashboard_view(&state, query.page_number()).await)
}
