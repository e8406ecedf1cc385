//! The exhibit store capability.
//!
//! Handlers depend on [`ExhibitStore`] rather than on a pool, so another
//! backing store (or a test double) can be swapped in without touching the
//! HTTP layer. [`MySqlStore`] is the production implementation.

use async_trait::async_trait;

use crate::models::{Item, Quiz, RecipientRequest, Theme};
use crate::repositories::{ItemRepo, QuizRepo, RecipientRepo, ThemeRepo};
use crate::DbPool;

/// Any failure from the data layer. All variants are terminal for the
/// request that hit them; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(sqlx::Error),

    /// The store could not reach its backend: no pooled connection within
    /// the acquire timeout, or the pool is shut down.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Operations the HTTP layer needs from the exhibit store.
///
/// Every method is a future: dropping it (for example when the client
/// disconnects) abandons the in-flight query.
#[async_trait]
pub trait ExhibitStore: Send + Sync + 'static {
    /// Every theme, in a stable order.
    async fn get_all_themes(&self) -> Result<Vec<Theme>, StoreError>;

    /// Items of `theme_id` ordered by sequence number. No match is an empty
    /// vector, not an error.
    async fn get_items_by_theme(&self, theme_id: &str) -> Result<Vec<Item>, StoreError>;

    /// Quizzes of `theme_id` ordered by quiz number.
    async fn get_quizzes_by_theme(&self, theme_id: &str) -> Result<Vec<Quiz>, StoreError>;

    /// Record one recipient registration.
    async fn add_recipient(&self, input: &RecipientRequest) -> Result<(), StoreError>;

    /// Check that the backend answers.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`ExhibitStore`] backed by a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: DbPool,
}

impl MySqlStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ExhibitStore for MySqlStore {
    async fn get_all_themes(&self) -> Result<Vec<Theme>, StoreError> {
        Ok(ThemeRepo::list_all(&self.pool).await?)
    }

    async fn get_items_by_theme(&self, theme_id: &str) -> Result<Vec<Item>, StoreError> {
        Ok(ItemRepo::list_by_theme(&self.pool, theme_id).await?)
    }

    async fn get_quizzes_by_theme(&self, theme_id: &str) -> Result<Vec<Quiz>, StoreError> {
        Ok(QuizRepo::list_by_theme(&self.pool, theme_id).await?)
    }

    async fn add_recipient(&self, input: &RecipientRequest) -> Result<(), StoreError> {
        Ok(RecipientRepo::create(&self.pool, input).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
