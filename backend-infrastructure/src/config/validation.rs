use backend_domain::{DbConfig, DbSettings, LogQueryError};

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_ACCEPT_INVALID_CERTS: &str = "DB_ACCEPT_INVALID_CERTS";
pub const DB_TIMEZONE: &str = "DB_TIMEZONE";

/// Checks the connection settings in order (host, port, user, password,
/// database) and reports the first one missing. A port that does not
/// parse to a non-zero number counts as missing.
pub fn require_db_config(settings: &DbSettings) -> Result<DbConfig, LogQueryError> {
    let host = require("host", &settings.host)?;
    let port = require("port", &settings.port)?
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or(LogQueryError::MissingConfig("port"))?;
    let user = require("user", &settings.user)?;
    let password = require("password", &settings.password)?;
    let database = require("database", &settings.database)?;

    Ok(DbConfig {
        host: host.to_string(),
        port,
        user: user.to_string(),
        password: password.to_string(),
        database: database.to_string(),
        accept_invalid_certs: settings.accept_invalid_certs,
        connect_timeout_seconds: settings.connect_timeout_seconds,
        time_zone: settings.time_zone,
    })
}

fn require<'a>(key: &'static str, value: &'a Option<String>) -> Result<&'a str, LogQueryError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LogQueryError::MissingConfig(key)),
    }
}
