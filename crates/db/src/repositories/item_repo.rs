//! Repository for the `Item` table.

use sqlx::MySqlPool;

use crate::models::item::Item;

/// Column list for `Item` queries.
const COLUMNS: &str = "\
    THEME_ID AS theme_id, \
    ITEM_SEQ AS item_seq, \
    ITEM_NAME AS item_name, \
    COALESCE(ITEM_DESC, '') AS item_desc, \
    COALESCE(SCRIPT_CHILD, '') AS script_child, \
    COALESCE(SCRIPT_GENERAL, '') AS script_general, \
    COALESCE(LATITUDE, 0) AS latitude, \
    COALESCE(LONGITUDE, 0) AS longitude";

/// Provides read access to exhibit items.
pub struct ItemRepo;

impl ItemRepo {
    /// List the items of one theme in sequence order.
    ///
    /// An unknown theme yields an empty vector.
    pub async fn list_by_theme(
        pool: &MySqlPool,
        theme_id: &str,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM Item \
             WHERE THEME_ID = ? \
             ORDER BY ITEM_SEQ ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }
}
