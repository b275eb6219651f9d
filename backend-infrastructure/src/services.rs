pub mod log_feed;
pub mod refresh_service;

pub use log_feed::*;
pub use refresh_service::*;
