use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer};
use tokio::fs;
use tracing::warn;

use backend_domain::{
    DbSettings, DbTimeZone, RuntimeConfig, TrackedCategories, DEFAULT_CATEGORIES,
};

use super::validation::{
    DB_ACCEPT_INVALID_CERTS, DB_HOST, DB_NAME, DB_PASSWORD, DB_PORT, DB_TIMEZONE, DB_USER,
};

pub const CONFIG_PATH_ENV: &str = "TRASHVISION_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub logs_url: String,
    pub refresh_interval_seconds: u64,
    pub page_size: usize,
    pub request_timeout_seconds: u64,
    pub categories: Vec<String>,
    pub db_host: Option<String>,
    #[serde(deserialize_with = "deserialize_port")]
    pub db_port: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_name: Option<String>,
    pub db_accept_invalid_certs: bool,
    pub db_connect_timeout_seconds: u64,
    /// `local`, `UTC` or an offset like `+07:00`.
    pub db_timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            logs_url: "http://127.0.0.1:3000/api/logs".to_string(),
            refresh_interval_seconds: 5,
            page_size: 10,
            request_timeout_seconds: 15,
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            db_host: None,
            db_port: None,
            db_user: None,
            db_password: None,
            db_name: None,
            db_accept_invalid_certs: false,
            db_connect_timeout_seconds: 10,
            db_timezone: "local".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        for value in [
            &mut self.db_host,
            &mut self.db_port,
            &mut self.db_user,
            &mut self.db_password,
            &mut self.db_name,
        ] {
            if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
                *value = None;
            }
        }
        self.logs_url = self.logs_url.trim().to_string();
        self.categories = TrackedCategories::new(&self.categories).into();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if !(self.logs_url.starts_with("http://") || self.logs_url.starts_with("https://")) {
            return Err(anyhow!("logs_url must be an http(s) URL"));
        }
        if self.refresh_interval_seconds == 0 {
            return Err(anyhow!("refresh_interval_seconds must be greater than 0"));
        }
        if self.page_size == 0 {
            return Err(anyhow!("page_size must be greater than 0"));
        }
        if self.categories.is_empty() {
            return Err(anyhow!("categories must not be empty"));
        }
        self.db_timezone.parse::<DbTimeZone>()?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            logs_url: self.logs_url.clone(),
            refresh_interval_seconds: self.refresh_interval_seconds,
            page_size: self.page_size,
            request_timeout_seconds: self.request_timeout_seconds,
            categories: TrackedCategories::new(&self.categories),
        }
    }

    pub fn to_db_settings(&self) -> DbSettings {
        DbSettings {
            host: self.db_host.clone(),
            port: self.db_port.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            accept_invalid_certs: self.db_accept_invalid_certs,
            connect_timeout_seconds: self.db_connect_timeout_seconds,
            // Rejected by `validate()` when unparseable.
            time_zone: self.db_timezone.parse().unwrap_or_default(),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("TRASHVISION_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("TRASHVISION_LOGS_URL") {
            self.logs_url = value;
        }
        if let Some(value) = lookup("TRASHVISION_REFRESH_INTERVAL_SECONDS") {
            self.refresh_interval_seconds = value.parse().unwrap_or(self.refresh_interval_seconds);
        }
        if let Some(value) = lookup("TRASHVISION_PAGE_SIZE") {
            self.page_size = value.parse().unwrap_or(self.page_size);
        }
        if let Some(value) = lookup("TRASHVISION_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("TRASHVISION_DB_CONNECT_TIMEOUT_SECONDS") {
            self.db_connect_timeout_seconds =
                value.parse().unwrap_or(self.db_connect_timeout_seconds);
        }
        if let Some(value) = lookup("TRASHVISION_CATEGORIES") {
            self.categories = parse_env_list(&value);
        }
        if let Some(value) = lookup(DB_HOST) {
            self.db_host = Some(value);
        }
        if let Some(value) = lookup(DB_PORT) {
            self.db_port = Some(value);
        }
        if let Some(value) = lookup(DB_USER) {
            self.db_user = Some(value);
        }
        if let Some(value) = lookup(DB_PASSWORD) {
            self.db_password = Some(value);
        }
        if let Some(value) = lookup(DB_NAME) {
            self.db_name = Some(value);
        }
        if let Some(value) = lookup(DB_ACCEPT_INVALID_CERTS) {
            self.db_accept_invalid_certs = value.parse().unwrap_or(self.db_accept_invalid_certs);
        }
        if let Some(value) = lookup(DB_TIMEZONE) {
            self.db_timezone = value;
        }
    }
}

fn parse_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Accepts `db_port = 3306` as well as `db_port = "3306"`.
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Port>::deserialize(deserializer)?.map(|port| match port {
        Port::Number(number) => number.to_string(),
        Port::Text(text) => text,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn toml_file_fills_db_settings() {
        let mut config: AppConfig = toml::from_str(
            r#"
bind_addr = "0.0.0.0:8080"
db_host = "mysql.internal"
db_port = 3306
db_user = "dashboard"
db_password = "secret"
db_name = "trashvision"
db_accept_invalid_certs = true
db_timezone = "+07:00"
"#,
        )
        .expect("parse");
        config.normalize();
        config.validate().expect("valid");

        let settings = config.to_db_settings();
        assert_eq!(settings.host.as_deref(), Some("mysql.internal"));
        assert_eq!(settings.port.as_deref(), Some("3306"));
        assert!(settings.accept_invalid_certs);
        assert_eq!(settings.time_zone, "+07:00".parse().expect("offset"));
        assert_eq!(config.refresh_interval_seconds, 5);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DB_HOST", "env-host"),
            ("DB_PORT", "3307"),
            ("DB_ACCEPT_INVALID_CERTS", "true"),
            ("TRASHVISION_PAGE_SIZE", "20"),
            ("TRASHVISION_CATEGORIES", "pet, can ,glass bottle,paper"),
        ]);
        let mut config = AppConfig {
            db_host: Some("file-host".to_string()),
            ..AppConfig::default()
        };
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));
        config.normalize();

        assert_eq!(config.db_host.as_deref(), Some("env-host"));
        assert_eq!(config.db_port.as_deref(), Some("3307"));
        assert!(config.db_accept_invalid_certs);
        assert_eq!(config.page_size, 20);
        assert_eq!(
            config.to_runtime_config().categories.names(),
            &["PET", "CAN", "GLASS BOTTLE", "PAPER"]
        );
    }

    #[test]
    fn blank_db_values_count_as_missing() {
        let mut config = AppConfig {
            db_user: Some("  ".to_string()),
            db_password: Some(String::new()),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.db_user.is_none());
        assert!(config.db_password.is_none());
    }

    #[test]
    fn trust_relaxation_is_off_by_default() {
        assert!(!AppConfig::default().to_db_settings().accept_invalid_certs);
    }

    #[test]
    fn stored_times_are_local_by_default() {
        assert_eq!(
            AppConfig::default().to_db_settings().time_zone,
            DbTimeZone::Local
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = AppConfig {
            page_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config.page_size = 10;
        config.bind_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());

        config.bind_addr = "127.0.0.1:3000".to_string();
        config.logs_url = "ftp://example".to_string();
        assert!(config.validate().is_err());

        config.logs_url = "http://127.0.0.1:3000/api/logs".to_string();
        config.db_timezone = "Mars/Olympus".to_string();
        assert!(config.validate().is_err());
    }
}
