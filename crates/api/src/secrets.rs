//! Database credentials from AWS Secrets Manager.
//!
//! The secret holds a JSON object with `username` and `password`, the shape
//! RDS-managed secrets use. A failed fetch is not fatal: the caller logs it
//! and keeps the credentials from the environment.

use std::fmt;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use hamo_db::DbConfig;
use serde::Deserialize;

use crate::config::SecretSource;

#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    #[error("failed to fetch secret {name}: {message}")]
    Fetch { name: String, message: String },

    #[error("secret {0} has no string value")]
    NotAString(String),

    #[error("secret is not a credentials object: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Username/password pair stored in the secret.
#[derive(Deserialize)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DbCredentials {
    /// Overwrite the user and password of `db`.
    pub fn apply(self, db: &mut DbConfig) {
        db.user = self.username;
        db.password = self.password;
    }
}

/// Parse the secret string into credentials.
pub fn parse_credentials(raw: &str) -> Result<DbCredentials, SecretsError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fetch and parse the credentials secret described by `source`.
pub async fn fetch_db_credentials(source: &SecretSource) -> Result<DbCredentials, SecretsError> {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(source.region.clone()))
        .load()
        .await;
    let client = aws_sdk_secretsmanager::Client::new(&sdk_config);

    let output = client
        .get_secret_value()
        .secret_id(&source.secret_name)
        .send()
        .await
        .map_err(|err| SecretsError::Fetch {
            name: source.secret_name.clone(),
            message: DisplayErrorContext(err).to_string(),
        })?;

    let raw = output
        .secret_string()
        .ok_or_else(|| SecretsError::NotAString(source.secret_name.clone()))?;

    parse_credentials(raw)
}
