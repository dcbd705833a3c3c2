use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error type for the keyword API endpoints.
///
/// Maps each failure onto the HTTP status and plain-text body the clients
/// expect. Store errors pass their message through verbatim.
#[derive(Debug)]
pub enum ApiError {
    /// Create request with a missing or empty `text`
    TextRequired,
    /// Create request for a text that is already stored
    AlreadyExists,
    /// Store operation or connection failure
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::TextRequired => (
                StatusCode::BAD_REQUEST,
                "Keyword text is required.".to_string(),
            ),
            ApiError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                "Keyword already exists.".to_string(),
            ),
            ApiError::Store(err) => {
                tracing::error!("Store error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
