use crate::error::ApiError;
use crate::models::{CreateKeywordRequest, KeywordResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/keywords - Create a keyword
///
/// Rejects a missing or empty `text`, then rejects an exact (case-sensitive)
/// duplicate. The existence check and the insert are two separate store
/// calls, not a transaction; concurrent creates of the same text can both
/// pass the check.
#[utoipa::path(
    post,
    path = routes::KEYWORDS,
    request_body = CreateKeywordRequest,
    responses(
        (status = 201, description = "Keyword created", body = KeywordResponse),
        (status = 400, description = "Missing text or duplicate keyword", body = String),
        (status = 500, description = "Store failure", body = String)
    ),
    tag = "keywords"
)]
pub async fn create_keyword(
    State(state): State<AppState>,
    Json(body): Json<CreateKeywordRequest>,
) -> Result<(StatusCode, Json<KeywordResponse>), ApiError> {
    let store = state.store.get_or_connect(&state.config).await?;

    let Some(text) = body.text.filter(|text| !text.is_empty()) else {
        return Err(ApiError::TextRequired);
    };

    if store.find_by_text(&text).await?.is_some() {
        return Err(ApiError::AlreadyExists);
    }

    let keyword = store.insert(&text).await?;

    tracing::info!("Created keyword {} ({})", keyword.id, keyword.text);
    Ok((StatusCode::CREATED, Json(keyword.into())))
}
