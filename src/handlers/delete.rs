use crate::error::ApiError;
use crate::models::DeleteQuery;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};

/// DELETE /api/keywords/{id} - Delete a keyword by id
///
/// Deleting an id that does not exist is still a 204.
#[utoipa::path(
    delete,
    path = routes::KEYWORD_ITEM,
    params(
        ("id" = String, Path, description = "Id of the keyword to delete")
    ),
    responses(
        (status = 204, description = "Keyword deleted (or was already absent)"),
        (status = 500, description = "Store failure", body = String)
    ),
    tag = "keywords"
)]
pub async fn delete_keyword(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(&state, &id).await
}

/// DELETE /api/keywords?id= - Delete a keyword, id in the query string
///
/// Same operation as the path form; kept for function-style callers that
/// route everything through the collection path.
#[utoipa::path(
    delete,
    path = routes::KEYWORDS,
    params(
        ("id" = String, Query, description = "Id of the keyword to delete")
    ),
    responses(
        (status = 204, description = "Keyword deleted (or was already absent)"),
        (status = 400, description = "Missing id parameter", body = String),
        (status = 500, description = "Store failure", body = String)
    ),
    tag = "keywords"
)]
pub async fn delete_keyword_by_query(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, ApiError> {
    remove(&state, &query.id).await
}

async fn remove(state: &AppState, id: &str) -> Result<StatusCode, ApiError> {
    let store = state.store.get_or_connect(&state.config).await?;

    store.delete_by_id(id).await?;

    tracing::info!("Deleted keyword {}", id);
    Ok(StatusCode::NO_CONTENT)
}
