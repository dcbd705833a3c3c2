use serde::{Deserialize, Serialize};

use crate::store::Keyword;

/// A keyword record as it appears on the wire.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeywordResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "alertCount")]
    pub alert_count: i64,
}

impl From<Keyword> for KeywordResponse {
    fn from(keyword: Keyword) -> Self {
        KeywordResponse {
            id: keyword.id,
            text: keyword.text,
            alert_count: keyword.alert_count,
        }
    }
}

/// Request body for creating a keyword.
///
/// `text` is optional at the serde level so a missing field reaches the
/// handler's presence check instead of being rejected by the extractor.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateKeywordRequest {
    pub text: Option<String>,
}

/// Query parameters for the collection-level delete form.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct DeleteQuery {
    pub id: String,
}

/// Response type for the health endpoint.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
