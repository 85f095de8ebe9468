// POST /api/hashtags — generate hashtags for a topic.
//
// Body: { "topic": "...", "api_key": "..."?, "count": 30? }
// A blank topic is rejected with 400 before any generation runs. Remote
// failures are not errors here: the response says `"source": "local"` and
// carries the fallback reason in `notice`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

/// Upper bound on `count` accepted from the page.
pub const MAX_COUNT: usize = 100;

#[derive(Deserialize)]
pub struct GenerateBody {
    pub topic: String,
    /// Per-request API key; the server's configured key is used when absent
    pub api_key: Option<String>,
    pub count: Option<usize>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Response {
    let topic = body.topic.trim();
    if topic.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Enter a topic to generate hashtags");
    }

    let count = body
        .count
        .unwrap_or(state.config.default_count)
        .min(MAX_COUNT);

    let credential = body
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| state.config.credential());

    let generation = state.dispatcher.generate(topic, credential, count).await;
    Json(generation).into_response()
}
