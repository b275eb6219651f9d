use std::sync::Arc;

use backend_domain::ports::EventRepository;
use backend_domain::RuntimeConfig;
use tokio::sync::RwLock;

use crate::{DashboardState, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub dashboard: Arc<RwLock<DashboardState>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, event_repo: Arc<dyn EventRepository>) -> Self {
        Self {
            config,
            event_repo,
            dashboard: Arc::new(RwLock::new(DashboardState::default())),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
