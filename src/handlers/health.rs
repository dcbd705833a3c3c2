use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/health - Health check
///
/// Runs a lightweight query against the store. 200 when the database is
/// reachable, 503 otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = String)
    ),
    tag = "health"
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let check = async {
        let store = state.store.get_or_connect(&state.config).await?;
        store.health_check().await
    };

    match check.await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
        })),
        Err(err) => {
            tracing::error!("Health check failed: {:#}", err);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Cannot reach store: {}", err),
            ))
        }
    }
}
