use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::{Connection, FromRow};
use tracing::warn;

use backend_domain::{
    DbConfig, DbSettings, DbTimeZone, EventRepository, LogQueryError, TrashEvent,
};

use crate::config::require_db_config;

pub const LOGS_QUERY: &str = r#"
SELECT CAST(t.trash_id AS SIGNED) AS trash_id, t.trash_name,
       CAST(b.bin_id AS SIGNED) AS bin_id, b.bin_name,
       l.time_stamp, l.correct
FROM trash_log l
JOIN trash t ON l.trash_id = t.trash_id
JOIN bin b ON l.bin_id = b.bin_id
ORDER BY l.time_stamp DESC
"#;

/// One row of `LOGS_QUERY`. `time_stamp` is the stored wall-clock value;
/// it becomes an instant only once the table's time zone is applied.
#[derive(Debug, FromRow)]
struct LogRow {
    trash_id: i64,
    trash_name: String,
    bin_id: i64,
    bin_name: String,
    time_stamp: NaiveDateTime,
    correct: bool,
}

impl LogRow {
    fn into_event(self, zone: &DbTimeZone) -> TrashEvent {
        TrashEvent {
            trash_id: self.trash_id,
            trash_name: self.trash_name,
            bin_id: self.bin_id,
            bin_name: self.bin_name,
            time_stamp: zone.to_utc(self.time_stamp),
            correct: self.correct,
        }
    }
}

/// Opens one connection per call and closes it on every exit path.
pub struct MySqlEventRepository {
    settings: DbSettings,
}

impl MySqlEventRepository {
    pub fn new(settings: DbSettings) -> Self {
        Self { settings }
    }

    async fn connect(&self) -> Result<MySqlConnection, LogQueryError> {
        let config = require_db_config(&self.settings)?;
        let options = connect_options(&config);
        let timeout_secs = config.connect_timeout_seconds.max(1);

        match tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            MySqlConnection::connect_with(&options),
        )
        .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(err)) => Err(LogQueryError::Query(
                anyhow::Error::new(err).context(format!(
                    "failed to connect to {}:{}",
                    config.host, config.port
                )),
            )),
            Err(_) => Err(LogQueryError::Query(anyhow!(
                "connecting to {}:{} timed out after {}s",
                config.host,
                config.port,
                timeout_secs
            ))),
        }
    }
}

#[async_trait]
impl EventRepository for MySqlEventRepository {
    async fn list_events(&self) -> Result<Vec<TrashEvent>, LogQueryError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, LogRow>(LOGS_QUERY)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;
        let zone = self.settings.time_zone;
        rows.map(|rows| rows.into_iter().map(|row| row.into_event(&zone)).collect())
            .map_err(|err| {
                LogQueryError::Query(anyhow::Error::new(err).context("logs query failed"))
            })
    }

    async fn ping(&self) -> Result<(), LogQueryError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        release(conn).await;
        result
            .map(|_| ())
            .map_err(|err| LogQueryError::Query(anyhow::Error::new(err).context("ping failed")))
    }
}

pub fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode(config.accept_invalid_certs))
        .timezone(config.time_zone.session_offset())
}

/// Relaxed trust still encrypts but skips chain and hostname checks, for
/// deployments behind a self-signed certificate.
pub fn ssl_mode(accept_invalid_certs: bool) -> MySqlSslMode {
    if accept_invalid_certs {
        MySqlSslMode::Required
    } else {
        MySqlSslMode::VerifyIdentity
    }
}

async fn release(conn: MySqlConnection) {
    if let Err(err) = conn.close().await {
        warn!("failed to close database connection: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_settings_fail_before_connecting() {
        let repo = MySqlEventRepository::new(DbSettings {
            host: Some("127.0.0.1".to_string()),
            port: Some("3306".to_string()),
            user: Some("dashboard".to_string()),
            password: None,
            database: Some("trashvision".to_string()),
            accept_invalid_certs: false,
            connect_timeout_seconds: 1,
            time_zone: DbTimeZone::Local,
        });

        let err = repo.list_events().await.expect_err("missing password");
        assert!(matches!(err, LogQueryError::MissingConfig("password")));
        assert!(err.is_config());

        let err = repo.ping().await.expect_err("missing password");
        assert!(err.is_config());
    }

    #[test]
    fn rows_are_read_in_the_table_time_zone() {
        let row = LogRow {
            trash_id: 4,
            trash_name: "PET".to_string(),
            bin_id: 2,
            bin_name: "Bin B".to_string(),
            time_stamp: NaiveDateTime::parse_from_str("2026-10-31 20:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            correct: true,
        };
        let zone: DbTimeZone = "+07:00".parse().unwrap();
        let event = row.into_event(&zone);
        assert_eq!(event.time_stamp.to_rfc3339(), "2026-10-31T13:00:00+00:00");
        assert_eq!(event.trash_id, 4);
        assert_eq!(event.bin_name, "Bin B");
    }

    #[test]
    fn trust_flag_selects_ssl_mode() {
        assert!(matches!(ssl_mode(true), MySqlSslMode::Required));
        assert!(matches!(ssl_mode(false), MySqlSslMode::VerifyIdentity));
    }

    #[test]
    fn query_joins_the_three_tables_newest_first() {
        let normalized = LOGS_QUERY.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(normalized.contains("FROM trash_log l JOIN trash t ON l.trash_id = t.trash_id"));
        assert!(normalized.contains("JOIN bin b ON l.bin_id = b.bin_id"));
        assert!(normalized.ends_with("ORDER BY l.time_stamp DESC"));
    }
}
