use std::sync::Arc;

use chrono::{DateTime, Utc};

use backend_domain::TrashEvent;

/// View-owned dashboard state.
///
/// `Loading` until the first poll completes, then `Ready`. A successful poll
/// replaces the whole event list; a failed one leaves `Ready` untouched.
#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready {
        events: Arc<Vec<TrashEvent>>,
        refreshed_at: Option<DateTime<Utc>>,
    },
}

impl DashboardState {
    pub fn apply_refresh(&mut self, events: Vec<TrashEvent>, refreshed_at: DateTime<Utc>) {
        *self = DashboardState::Ready {
            events: Arc::new(events),
            refreshed_at: Some(refreshed_at),
        };
    }

    /// A failed first poll still ends the loading phase, with nothing to show.
    pub fn apply_failure(&mut self) {
        if self.is_loading() {
            *self = DashboardState::Ready {
                events: Arc::new(Vec::new()),
                refreshed_at: None,
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn events(&self) -> Arc<Vec<TrashEvent>> {
        match self {
            DashboardState::Loading => Arc::new(Vec::new()),
            DashboardState::Ready { events, .. } => events.clone(),
        }
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            DashboardState::Loading => None,
            DashboardState::Ready { refreshed_at, .. } => *refreshed_at,
        }
    }
}
