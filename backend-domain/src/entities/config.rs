// Runtime configuration handed to the application layer

use crate::value_objects::{DbTimeZone, TrackedCategories};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub logs_url: String,
    pub refresh_interval_seconds: u64,
    pub page_size: usize,
    pub request_timeout_seconds: u64,
    pub categories: TrackedCategories,
}

/// Database settings as read from the environment; any field may be absent.
#[derive(Debug, Clone, Default)]
pub struct DbSettings {
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub accept_invalid_certs: bool,
    pub connect_timeout_seconds: u64,
    pub time_zone: DbTimeZone,
}

/// Database settings after every required key was found.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub accept_invalid_certs: bool,
    pub connect_timeout_seconds: u64,
    pub time_zone: DbTimeZone,
}
