use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_keyword, delete_keyword, delete_keyword_by_query, health, list_keywords,
    method_not_allowed,
};
use crate::routes;
use crate::state::AppState;
use axum::routing::{delete, get};
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The keyword API, shared by the server binary and the function adapter.
///
/// Unsupported methods on the keyword routes get the contract's 405 instead
/// of axum's default empty response.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            routes::KEYWORDS,
            get(list_keywords)
                .post(create_keyword)
                .delete(delete_keyword_by_query)
                .fallback(method_not_allowed),
        )
        .route(
            routes::KEYWORD_ITEM,
            delete(delete_keyword).fallback(method_not_allowed),
        )
        .route(routes::HEALTH, get(health))
        .with_state(state)
}

/// The full server-deployment router: API plus Swagger UI plus the SPA.
///
/// Non-API paths serve static assets from `public_dir`; unmatched paths fall
/// back to `index.html` so client-side routes resolve.
pub fn server_router(state: AppState, public_dir: &Path) -> Router {
    let spa = ServeDir::new(public_dir)
        .not_found_service(ServeFile::new(public_dir.join("index.html")));

    api_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
