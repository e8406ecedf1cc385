use std::fmt;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Connection settings for the exhibit database.
///
/// Built once at startup by the API binary and handed to
/// [`create_pool`](crate::create_pool).
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on simultaneously open connections.
    pub max_connections: u32,
    /// Connections kept open even when idle.
    pub min_connections: u32,
    /// Idle connections above `min_connections` are closed after this long.
    pub idle_timeout: Duration,
    /// Connections are retired after this long regardless of use.
    pub max_lifetime: Duration,
    /// Bound on opening or acquiring a connection.
    pub connect_timeout: Duration,
    /// Skip the startup connectivity check and connect lazily.
    pub skip_check: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            database: "museumdb".into(),
            max_connections: 10,
            min_connections: 0,
            idle_timeout: Duration::from_secs(180),
            max_lifetime: Duration::from_secs(180),
            connect_timeout: Duration::from_secs(5),
            skip_check: false,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("idle_timeout", &self.idle_timeout)
            .field("max_lifetime", &self.max_lifetime)
            .field("connect_timeout", &self.connect_timeout)
            .field("skip_check", &self.skip_check)
            .finish()
    }
}

impl DbConfig {
    /// Driver-level connect options (utf8mb4, no URL escaping involved).
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .charset("utf8mb4")
    }
}
