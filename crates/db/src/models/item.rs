use serde::Serialize;
use sqlx::FromRow;

/// A row from the `Item` table: one exhibit within a theme.
///
/// Carries two narration scripts (one for children, one for a general
/// audience) and the exhibit's coordinates. Missing text comes back as `""`
/// and missing coordinates as `0.0`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Item {
    pub theme_id: String,
    /// Position of the item within its theme.
    pub item_seq: i32,
    pub item_name: String,
    pub item_desc: String,
    pub script_child: String,
    pub script_general: String,
    pub latitude: f64,
    pub longitude: f64,
}
