pub mod dashboard_queries;
pub mod log_queries;
