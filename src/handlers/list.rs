use crate::error::ApiError;
use crate::models::KeywordResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /api/keywords - List all keywords
#[utoipa::path(
    get,
    path = routes::KEYWORDS,
    responses(
        (status = 200, description = "All keyword records", body = [KeywordResponse]),
        (status = 500, description = "Store failure", body = String)
    ),
    tag = "keywords"
)]
pub async fn list_keywords(
    State(state): State<AppState>,
) -> Result<Json<Vec<KeywordResponse>>, ApiError> {
    let store = state.store.get_or_connect(&state.config).await?;

    let keywords = store.find_all().await?;

    tracing::info!("Listed {} keywords", keywords.len());
    Ok(Json(keywords.into_iter().map(KeywordResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::models::KeywordResponse;
    use crate::test_support::{emulator_app, lock_env};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_list_includes_created_keyword_once() {
        let _guard = lock_env();
        let Some(app) = emulator_app("list-endpoint-test", "list-endpoint-test-db").await else {
            return;
        };

        let text = format!("bitcoin-{}", Uuid::new_v4());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/keywords")
                    .header("content-type", "application/json")
                    .body(Body::from(format!(r#"{{"text":"{}"}}"#, text)))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/keywords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let keywords: Vec<KeywordResponse> = serde_json::from_slice(&body).unwrap();

        let matching: Vec<_> = keywords.iter().filter(|k| k.text == text).collect();
        assert_eq!(matching.len(), 1, "exactly one record with that text");
        assert_eq!(matching[0].alert_count, 0);
        assert!(!matching[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_list_response_is_a_json_array() {
        let _guard = lock_env();
        let Some(app) = emulator_app("list-shape-test", "list-shape-test-db").await else {
            return;
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/keywords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value.is_array());
    }
}
