use serde::Serialize;
use sqlx::FromRow;

/// A row from the `Quiz` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Quiz {
    pub theme_id: String,
    pub quiz_no: i32,
    pub question: String,
    pub answer: String,
    /// Free-form answer choices, stored as the client serialized them.
    pub options: String,
    pub quiz_desc: String,
}
