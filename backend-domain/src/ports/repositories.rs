use async_trait::async_trait;

use crate::entities::TrashEvent;
use crate::errors::LogQueryError;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every logged event, newest first. Never a partial list.
    async fn list_events(&self) -> Result<Vec<TrashEvent>, LogQueryError>;
    async fn ping(&self) -> Result<(), LogQueryError>;
}
