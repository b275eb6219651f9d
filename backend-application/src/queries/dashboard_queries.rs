use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use backend_domain::{paginate, summarize, DashboardView};

use crate::AppState;

pub async fn dashboard_view(state: &AppState, page: Option<usize>) -> DashboardView {
    dashboard_view_at(state, page, &Local::now()).await
}

/// Builds the view from a snapshot of the dashboard state; the lock is
/// released before any counting happens.
pub async fn dashboard_view_at<Tz>(
    state: &AppState,
    page: Option<usize>,
    now: &DateTime<Tz>,
) -> DashboardView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (loading, events, last_refresh) = {
        let dashboard = state.dashboard.read().await;
        (
            dashboard.is_loading(),
            dashboard.events(),
            dashboard.refreshed_at(),
        )
    };

    DashboardView {
        loading,
        last_refresh,
        summary: summarize(&events, &state.config.categories, now),
        page: paginate(&events, page.unwrap_or(1), state.config.page_size),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use backend_domain::{
        EventRepository, LogQueryError, RuntimeConfig, TrackedCategories, TrashEvent,
    };
    use chrono::{Duration, Utc};

    use super::*;

    struct NoRepo;

    #[async_trait]
    impl EventRepository for NoRepo {
        async fn list_events(&self) -> Result<Vec<TrashEvent>, LogQueryError> {
            Ok(Vec::new())
        }

        async fn ping(&self) -> Result<(), LogQueryError> {
            Ok(())
        }
    }

    fn state() -> AppState {
        let config = RuntimeConfig {
            bind_addr: "127.0.0.1:3000".to_string(),
            logs_url: "http://127.0.0.1:3000/api/logs".to_string(),
            refresh_interval_seconds: 5,
            page_size: 10,
            request_timeout_seconds: 15,
            categories: TrackedCategories::default(),
        };
        AppState::new(config, Arc::new(NoRepo))
    }

    #[tokio::test]
    async fn loading_view_is_empty() {
        let state = state();
        let view = dashboard_view(&state, None).await;
        assert!(view.loading);
        assert_eq!(view.summary.all_time.total, 0);
        assert_eq!(view.page.page, 1);
        assert!(view.page.rows.is_empty());
    }

    #[tokio::test]
    async fn ready_view_counts_and_pages() {
        let state = state();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let events: Vec<TrashEvent> = (0..25)
            .map(|i| TrashEvent {
                trash_id: i,
                trash_name: if i % 2 == 0 { "pet" } else { "can" }.to_string(),
                bin_id: 1,
                bin_name: "Bin A".to_string(),
                time_stamp: now - Duration::days(i),
                correct: true,
            })
            .collect();
        state.dashboard.write().await.apply_refresh(events, now);

        let view = dashboard_view_at(&state, Some(3), &now).await;
        assert!(!view.loading);
        assert_eq!(view.last_refresh, Some(now));
        assert_eq!(view.summary.all_time.total, 25);
        assert_eq!(view.summary.all_time.count_of("PET"), Some(13));
        assert_eq!(view.summary.all_time.count_of("CAN"), Some(12));
        // 18 October back to 1 October
        assert_eq!(view.summary.this_month.total, 18);
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(view.page.rows.len(), 5);
        assert_eq!(view.page.rows[4].number, 1);
    }
}
