// GET /api/categories — the built-in tag table used by local generation.

use axum::response::IntoResponse;
use axum::Json;

use crate::tags::categories::CATEGORIES;

pub async fn list_categories() -> impl IntoResponse {
    Json(serde_json::json!({ "categories": CATEGORIES }))
}
