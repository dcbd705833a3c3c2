pub mod create;
pub mod delete;
pub mod health;
pub mod list;

pub use create::create_keyword;
pub use delete::{delete_keyword, delete_keyword_by_query};
pub use health::health;
pub use list::list_keywords;

use axum::http::StatusCode;

/// Fallback for unsupported methods on the keyword routes.
///
/// Runs before any store access, so rejected methods never trigger a
/// connection attempt.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
