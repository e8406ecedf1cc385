//! Repository for the `Quiz` table.

use sqlx::MySqlPool;

use crate::models::quiz::Quiz;

/// Column list for `Quiz` queries.
const COLUMNS: &str = "\
    THEME_ID AS theme_id, \
    QUIZ_NO AS quiz_no, \
    QUESTION AS question, \
    ANSWER AS answer, \
    COALESCE(OPTIONS, '') AS options, \
    COALESCE(QUIZ_DESC, '') AS quiz_desc";

/// Provides read access to theme quizzes.
pub struct QuizRepo;

impl QuizRepo {
    /// List the quizzes of one theme ordered by quiz number.
    pub async fn list_by_theme(
        pool: &MySqlPool,
        theme_id: &str,
    ) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM Quiz \
             WHERE THEME_ID = ? \
             ORDER BY QUIZ_NO ASC"
        );
        sqlx::query_as::<_, Quiz>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }
}
