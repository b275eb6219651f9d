use chrono::Utc;
use tracing::{debug, warn};

use backend_domain::LogFeed;

use crate::AppState;

/// One refresh cycle: pull the full event list and replace the dashboard
/// state with it. Failures are logged and leave the current state in place.
pub async fn refresh_dashboard(state: &AppState, feed: &dyn LogFeed) {
    match feed.fetch_logs().await {
        Ok(events) => {
            let count = events.len();
            state.dashboard.write().await.apply_refresh(events, Utc::now());
            state.metrics.record_refresh(count);
            debug!("dashboard refreshed with {} events", count);
        }
        Err(err) => {
            warn!("Error fetching logs: {:#}", err);
            state.metrics.record_refresh_failure();
            state.dashboard.write().await.apply_failure();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use backend_domain::{
        EventRepository, LogQueryError, RuntimeConfig, TrackedCategories, TrashEvent,
    };
    use chrono::TimeZone;

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

    /// Succeeds with a growing list on odd calls, fails on even calls.
    #[derive(Default)]
    struct FlakyFeed {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LogFeed for FlakyFeed {
        async fn fetch_logs(&self) -> anyhow::Result<Vec<TrashEvent>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call % 2 == 0 {
                anyhow::bail!("HTTP error! status: 500");
            }
            Ok((0..call)
                .map(|i| TrashEvent {
                    trash_id: i as i64,
                    trash_name: "GLASS BOTTLE".to_string(),
                    bin_id: 3,
                    bin_name: "Bin C".to_string(),
                    time_stamp: Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
                    correct: true,
                })
                .collect())
        }
    }

    struct DownFeed;

    #[async_trait]
    impl LogFeed for DownFeed {
        async fn fetch_logs(&self) -> anyhow::Result<Vec<TrashEvent>> {
            anyhow::bail!("connection refused")
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
    async fn failed_poll_keeps_previous_events() {
        let state = state();
        let feed = FlakyFeed::default();

        refresh_dashboard(&state, &feed).await;
        assert_eq!(state.dashboard.read().await.events().len(), 1);

        refresh_dashboard(&state, &feed).await;
        let dashboard = state.dashboard.read().await.clone();
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.events().len(), 1);

        refresh_dashboard(&state, &feed).await;
        assert_eq!(state.dashboard.read().await.events().len(), 3);
    }

    #[tokio::test]
    async fn failed_first_poll_ends_loading() {
        let state = state();
        refresh_dashboard(&state, &DownFeed).await;
        let dashboard = state.dashboard.read().await;
        assert!(!dashboard.is_loading());
        assert!(dashboard.events().is_empty());
        assert!(dashboard.refreshed_at().is_none());
    }
}
