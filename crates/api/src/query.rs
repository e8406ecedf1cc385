//! Shared query parameter types for API handlers.

/// Query parameters for theme-scoped listings (`?theme_id=`).
///
/// The field is optional at decode time; handlers reject a missing or empty
/// value with a validation error before calling the store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ThemeParams {
    pub theme_id: Option<String>,
}

impl ThemeParams {
    /// Build from the decoded query pairs. When `theme_id` repeats, the first
    /// occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let theme_id = pairs
            .into_iter()
            .find(|(key, _)| key == "theme_id")
            .map(|(_, value)| value);
        Self { theme_id }
    }
}
