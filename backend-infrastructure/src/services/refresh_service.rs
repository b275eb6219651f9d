use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use backend_application::commands::refresh_commands::refresh_dashboard;
use backend_application::AppState;
use backend_domain::LogFeed;

/// Polls `feed` on the configured interval until shutdown. The first poll
/// runs immediately. A poll in flight when shutdown arrives is allowed to
/// finish; only the timer stops.
pub async fn schedule_dashboard_refresh(
    state: AppState,
    feed: Arc<dyn LogFeed>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let period = Duration::from_secs(state.config.refresh_interval_seconds.max(1));
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(
        interval_secs = period.as_secs(),
        url = %state.config.logs_url,
        "dashboard refresh starting"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh_dashboard(&state, feed.as_ref()).await;
            }
            _ = shutdown.recv() => {
                info!("dashboard refresh stopped");
                break;
            }
        }
    }
}
