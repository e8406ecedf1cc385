//! Repository for the `Recipient` table.
//!
//! Write-only: registrations are never read back through the API.

use sqlx::MySqlPool;

use crate::models::recipient::RecipientRequest;

/// Provides data access for recipient registrations.
pub struct RecipientRepo;

impl RecipientRepo {
    /// Insert one registration stamped with the database's current date and
    /// time. Duplicate registrations are accepted.
    pub async fn create(pool: &MySqlPool, dto: &RecipientRequest) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO Recipient (THEME_ID, EMAIL, RECV_DATE, RECV_TIME) \
             VALUES (?, ?, CURDATE(), CURTIME())",
        )
        .bind(&dto.theme_id)
        .bind(&dto.email)
        .execute(pool)
        .await?;
        Ok(())
    }
}
