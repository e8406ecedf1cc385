pub mod exhibits;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /themes                 list themes (any method)
/// /items?theme_id=        list items of a theme (any method)
/// /quizzes?theme_id=      list quizzes of a theme (any method)
/// /recipient              register a recipient (POST only)
/// ```
pub fn api_routes() -> Router<AppState> {
    exhibits::router()
}
