use serde::Serialize;
use sqlx::FromRow;

/// A row from the `Theme` table: the top-level grouping of exhibit content.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Theme {
    pub theme_id: String,
    pub theme_name: String,
    /// Empty when the stored description is NULL.
    pub theme_desc: String,
}
