//! Repository for the `Theme` table.

use sqlx::MySqlPool;

use crate::models::theme::Theme;

/// Column list for `Theme` queries.
const COLUMNS: &str = "\
    THEME_ID AS theme_id, \
    THEME_NAME AS theme_name, \
    COALESCE(THEME_DESC, '') AS theme_desc";

/// Provides read access to exhibit themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// List every theme.
    ///
    /// Ordered by id so repeated calls against an unchanged table return
    /// identical sequences.
    pub async fn list_all(pool: &MySqlPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Theme ORDER BY THEME_ID");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }
}
