use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CreateKeywordRequest, HealthResponse, KeywordResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "keyword-watch API",
        version = "1.0.0",
        description = "Tracked keywords with alert counters, backed by Cloud Spanner"
    ),
    paths(
        handlers::list::list_keywords,
        handlers::create::create_keyword,
        handlers::delete::delete_keyword,
        handlers::delete::delete_keyword_by_query,
        handlers::health::health
    ),
    components(schemas(KeywordResponse, CreateKeywordRequest, HealthResponse)),
    tags(
        (name = "keywords", description = "Keyword list operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
