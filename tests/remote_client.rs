// End-to-end tests for RemoteClient against a stub HTTP endpoint.
//
// Each test binds an axum server to an ephemeral local port, points the
// client at it, and checks both the request that went out and how the
// dispatcher handled the answer.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use hashtagger::dispatch::{Dispatcher, Source};
use hashtagger::remote::client::RemoteClient;
use hashtagger::remote::traits::{GenerateRequest, HashtagService};
use hashtagger::tags::local::LocalGenerator;
use hashtagger::tags::sampler::SeededSampler;

type Captured = Arc<Mutex<Option<(HeaderMap, Value)>>>;

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    captured: Captured,
}

async fn stub_generate(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    *state.captured.lock().unwrap() = Some((headers, body));
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
        .into_response()
}

/// Start a stub endpoint; returns its URL and the captured-request slot.
async fn spawn_stub(status: StatusCode, body: &str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let state = StubState {
        status,
        body: body.to_string(),
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/v1/generate", post(stub_generate))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1/generate"), captured)
}

fn seeded_local() -> LocalGenerator {
    LocalGenerator::new(Box::new(SeededSampler::new(5)))
}

fn dispatcher_for(url: &str) -> Dispatcher {
    let client = RemoteClient::new(url).unwrap();
    Dispatcher::new(Box::new(client), seeded_local(), "en")
}

#[tokio::test]
async fn success_sends_bearer_request_and_normalizes_tags() {
    let (url, captured) = spawn_stub(
        StatusCode::OK,
        r##"{"hashtags": ["rust", "#rustlang"], "trending": ["coding", "rust"], "niche": null}"##,
    )
    .await;

    let generation = dispatcher_for(&url)
        .generate("rust", Some("test-key"), 30)
        .await;

    assert_eq!(generation.source, Source::Remote);
    assert_eq!(generation.hashtags, vec!["#rust", "#rustlang", "#coding"]);

    let (headers, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(headers["authorization"], "Bearer test-key");
    assert_eq!(headers["x-api-version"], "1.0");
    assert_eq!(
        body,
        json!({
            "topic": "rust",
            "count": 30,
            "include_trending": true,
            "language": "en",
        })
    );
}

#[tokio::test]
async fn error_status_falls_back_with_message() {
    let (url, _) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message": "upstream exploded"}"#,
    )
    .await;

    let generation = dispatcher_for(&url)
        .generate("coffee", Some("test-key"), 30)
        .await;

    assert_eq!(generation.source, Source::Local);
    let notice = generation.notice.unwrap();
    assert!(notice.contains("500"), "notice: {notice}");
    assert!(notice.contains("upstream exploded"), "notice: {notice}");
    assert_eq!(generation.hashtags, seeded_local().generate("coffee", 30));
}

#[tokio::test]
async fn malformed_payload_falls_back() {
    let (url, _) = spawn_stub(StatusCode::OK, "definitely not json").await;

    let generation = dispatcher_for(&url)
        .generate("coffee", Some("test-key"), 10)
        .await;

    assert_eq!(generation.source, Source::Local);
    assert_eq!(generation.hashtags, seeded_local().generate("coffee", 10));
}

#[tokio::test]
async fn wrong_shape_payload_falls_back() {
    let (url, _) = spawn_stub(StatusCode::OK, r#"{"hashtags": "not-a-list"}"#).await;

    let generation = dispatcher_for(&url)
        .generate("coffee", Some("test-key"), 10)
        .await;

    assert_eq!(generation.source, Source::Local);
}

#[tokio::test]
async fn unreachable_endpoint_falls_back() {
    // Bind then drop to get a local port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generation = dispatcher_for(&format!("http://{addr}/v1/generate"))
        .generate("coffee", Some("test-key"), 30)
        .await;

    assert_eq!(generation.source, Source::Local);
    assert!(generation.fell_back());
}

#[tokio::test]
async fn client_reports_unauthorized_as_error() {
    let (url, _) = spawn_stub(StatusCode::UNAUTHORIZED, "bad key").await;
    let client = RemoteClient::new(&url).unwrap();
    assert_eq!(client.endpoint(), url);

    let request = GenerateRequest {
        topic: "coffee".to_string(),
        count: 5,
        include_trending: true,
        language: "en".to_string(),
    };
    let err = client.generate(&request, "nope").await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("401"), "error: {message}");
    assert!(message.contains("bad key"), "error: {message}");
}
