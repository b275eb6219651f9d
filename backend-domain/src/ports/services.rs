use async_trait::async_trait;

use crate::entities::TrashEvent;

/// Where the dashboard view pulls its full event list from.
#[async_trait]
pub trait LogFeed: Send + Sync {
    async fn fetch_logs(&self) -> anyhow::Result<Vec<TrashEvent>>;
}
