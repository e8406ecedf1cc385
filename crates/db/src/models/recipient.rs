use serde::Deserialize;
use validator::Validate;

/// Payload of `POST /api/recipient`: register an email against a theme.
///
/// Absent fields deserialize to empty strings so they are reported by
/// validation rather than as a decode failure. The registration date and
/// time are assigned by the database on insert.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct RecipientRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub theme_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
}
