//! Route definitions for exhibit content and recipient registration.
//!
//! Every route is mounted with `any` so the handlers decide method policy:
//! the read endpoints ignore the method and `/recipient` answers 405 with a
//! JSON error body for anything but POST.

use axum::routing::any;
use axum::Router;

use crate::handlers::{exhibits, recipient};
use crate::state::AppState;

/// Exhibit routes mounted under `/api`.
///
/// ```text
/// ANY /themes     -> list_themes
/// ANY /items      -> list_items
/// ANY /quizzes    -> list_quizzes
/// ANY /recipient  -> add_recipient
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/themes", any(exhibits::list_themes))
        .route("/items", any(exhibits::list_items))
        .route("/quizzes", any(exhibits::list_quizzes))
        .route("/recipient", any(recipient::add_recipient))
}
