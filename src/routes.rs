// Route path constants - single source of truth for all API paths

pub const KEYWORDS: &str = "/api/keywords";
pub const KEYWORD_ITEM: &str = "/api/keywords/{id}";
pub const HEALTH: &str = "/api/health";
