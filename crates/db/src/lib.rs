//! MySQL access for the exhibit API.
//!
//! Row models live in [`models`], per-table queries in [`repositories`], and
//! the [`store::ExhibitStore`] capability the HTTP layer is written against
//! in [`store`].

use sqlx::mysql::MySqlPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use store::{ExhibitStore, MySqlStore, StoreError};

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from a [`DbConfig`].
///
/// Unless `skip_check` is set, one connection is opened before returning so
/// an unreachable database fails here, bounded by `connect_timeout`. With
/// `skip_check` the pool connects lazily on first use.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .acquire_timeout(config.connect_timeout);

    if config.skip_check {
        tracing::warn!(
            host = %config.host,
            port = config.port,
            "Skipping database connectivity check, pool will connect lazily"
        );
        return Ok(options.connect_lazy_with(config.connect_options()));
    }

    options.connect_with(config.connect_options()).await
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
