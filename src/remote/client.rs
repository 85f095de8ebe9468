// HTTP client for the remote hashtag generation endpoint.
//
// One POST per request, bearer auth, JSON in and out. No retries: a failure
// here is reported to the caller, which falls back to local generation.
// A payload carrying an `error` field still parses fine here; the dispatcher
// treats it as a failure.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::traits::{GenerateRequest, GenerateResponse, HashtagService};

/// Default remote endpoint.
pub const DEFAULT_API_URL: &str = "https://api.hashtaggenerator.app/v1/generate";

/// Version header expected by the remote service.
const API_VERSION: &str = "1.0";

/// Error body some non-success responses carry.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest-backed implementation of [`HashtagService`].
pub struct RemoteClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClient {
    /// Create a client that posts to `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hashtagger/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HashtagService for RemoteClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
        credential: &str,
    ) -> Result<GenerateResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .header("X-API-Version", API_VERSION)
            .json(request)
            .send()
            .await
            .context("Hashtag API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            anyhow::bail!("Hashtag API returned {}: {}", status, message);
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse hashtag API response")?;

        debug!(
            topic = %request.topic,
            hashtags = payload.hashtags.as_ref().map_or(0, Vec::len),
            trending = payload.trending.as_ref().map_or(0, Vec::len),
            niche = payload.niche.as_ref().map_or(0, Vec::len),
            "Hashtag API responded"
        );

        Ok(payload)
    }
}
