// Domain entities

pub mod config;
pub mod dashboard;
pub mod event;

pub use config::*;
pub use dashboard::*;
pub use event::*;
