use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use hamo_db::DbConfig;

/// Startup configuration problems. Any of these stops the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where to fetch database credentials from AWS Secrets Manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSource {
    pub secret_name: String,
    pub region: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection and pool settings.
    pub db: DbConfig,
    /// Set when credentials should come from Secrets Manager.
    pub secrets: Option<SecretSource>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `SERVER_PORT` / `PORT`    | `8080`                  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DB_HOST`                 | `localhost`             |
    /// | `DB_PORT`                 | `3306`                  |
    /// | `DB_USER`                 | `root` (only without `DB_HOST`) |
    /// | `DB_PASS`                 | empty                   |
    /// | `DB_NAME`                 | `museumdb` (only without `DB_HOST`) |
    /// | `DB_MAX_CONNECTIONS`      | `10`                    |
    /// | `DB_MIN_CONNECTIONS`      | `0`                     |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `180`                   |
    /// | `DB_MAX_LIFETIME_SECS`    | `180`                   |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `5`                     |
    /// | `SKIP_DB_CHECK`           | off (`1` / `true`)      |
    /// | `USE_SECRETS_MANAGER`     | off (`true`)            |
    /// | `SECRET_NAME`             | required with secrets   |
    /// | `AWS_REGION`              | `ap-northeast-2`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match get("SERVER_PORT") {
            Some(raw) => parse("SERVER_PORT", raw)?,
            None => parse_or("PORT", get("PORT"), 8080)?,
        };
        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30)?;

        let defaults = DbConfig::default();
        // Without an explicit host we are on a developer machine: fall back
        // to the local museum database.
        let (db_host, db_user, db_name) = match get("DB_HOST") {
            Some(host) => (
                host,
                get("DB_USER").unwrap_or_default(),
                get("DB_NAME").unwrap_or_default(),
            ),
            None => (
                defaults.host.clone(),
                get("DB_USER").unwrap_or_else(|| defaults.user.clone()),
                get("DB_NAME").unwrap_or_else(|| defaults.database.clone()),
            ),
        };

        let db = DbConfig {
            host: db_host,
            port: parse_or("DB_PORT", get("DB_PORT"), defaults.port)?,
            user: db_user,
            password: get("DB_PASS").unwrap_or_default(),
            database: db_name,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            min_connections: parse_or(
                "DB_MIN_CONNECTIONS",
                get("DB_MIN_CONNECTIONS"),
                defaults.min_connections,
            )?,
            idle_timeout: secs_or(
                "DB_IDLE_TIMEOUT_SECS",
                get("DB_IDLE_TIMEOUT_SECS"),
                defaults.idle_timeout,
            )?,
            max_lifetime: secs_or(
                "DB_MAX_LIFETIME_SECS",
                get("DB_MAX_LIFETIME_SECS"),
                defaults.max_lifetime,
            )?,
            connect_timeout: secs_or(
                "DB_CONNECT_TIMEOUT_SECS",
                get("DB_CONNECT_TIMEOUT_SECS"),
                defaults.connect_timeout,
            )?,
            skip_check: flag(get("SKIP_DB_CHECK")),
        };

        if db.min_connections > db.max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS",
                value: db.min_connections.to_string(),
                reason: format!("exceeds DB_MAX_CONNECTIONS ({})", db.max_connections),
            });
        }

        let secrets = if flag(get("USE_SECRETS_MANAGER")) {
            Some(SecretSource {
                secret_name: get("SECRET_NAME")
                    .ok_or(ConfigError::Missing { var: "SECRET_NAME" })?,
                region: get("AWS_REGION").unwrap_or_else(|| "ap-northeast-2".into()),
            })
        } else {
            None
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            db,
            secrets,
        })
    }
}

/// `1` and any casing of `true` switch a flag on.
fn flag(raw: Option<String>) -> bool {
    raw.is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn parse<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map_or(Ok(default), |raw| parse(var, raw))
}

fn secs_or(
    var: &'static str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    raw.map_or(Ok(default), |raw| parse(var, raw).map(Duration::from_secs))
}
