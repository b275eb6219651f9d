// Backend Application Layer

pub mod commands;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;

pub use dashboard::DashboardState;
pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
