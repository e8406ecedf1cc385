//! Handlers for exhibit content: themes, items and quizzes.
//!
//! These endpoints are read-only and do not check the request method.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use hamo_core::validation::require_param;

use crate::error::{AppError, AppResult};
use crate::query::ThemeParams;
use crate::response::Utf8Json;
use crate::state::AppState;

/// Query pairs as decoded, so a repeated `theme_id` is not a decode error.
type RawThemeQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// `/api/themes`
///
/// List every theme.
pub async fn list_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let themes = state
        .store
        .get_all_themes()
        .await
        .map_err(AppError::query("failed to load themes"))?;

    Ok(Utf8Json(themes))
}

/// `/api/items?theme_id=`
///
/// List the items of a theme in sequence order. An unknown theme returns an
/// empty array.
pub async fn list_items(
    State(state): State<AppState>,
    params: RawThemeQuery,
) -> AppResult<impl IntoResponse> {
    let theme_id = theme_id(params)?;

    let items = state
        .store
        .get_items_by_theme(&theme_id)
        .await
        .map_err(AppError::query("failed to load items"))?;

    tracing::debug!(theme_id = %theme_id, count = items.len(), "Items listed");

    Ok(Utf8Json(items))
}

/// `/api/quizzes?theme_id=`
///
/// List the quizzes of a theme ordered by quiz number.
pub async fn list_quizzes(
    State(state): State<AppState>,
    params: RawThemeQuery,
) -> AppResult<impl IntoResponse> {
    let theme_id = theme_id(params)?;

    let quizzes = state
        .store
        .get_quizzes_by_theme(&theme_id)
        .await
        .map_err(AppError::query("failed to load quizzes"))?;

    tracing::debug!(theme_id = %theme_id, count = quizzes.len(), "Quizzes listed");

    Ok(Utf8Json(quizzes))
}

fn theme_id(params: RawThemeQuery) -> AppResult<String> {
    let Query(pairs) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(require_param("theme_id", ThemeParams::from_pairs(pairs).theme_id)?)
}
