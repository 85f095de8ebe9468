// Hashtag service trait and the wire types it exchanges.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// JSON body sent to the remote generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub count: usize,
    pub include_trending: bool,
    pub language: String,
}

/// Success payload from the remote endpoint. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub hashtags: Option<Vec<String>>,
    pub trending: Option<Vec<String>>,
    pub niche: Option<Vec<String>>,
    pub error: Option<String>,
}

impl GenerateResponse {
    /// The logical error reported by the service, if any. Only `""` doesn't count.
    pub fn logical_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Primary, trending, then niche tags, in that order.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        [&self.hashtags, &self.trending, &self.niche]
            .into_iter()
            .flatten()
            .flatten()
            .map(String::as_str)
    }
}

/// Anything that can answer a hashtag generation request.
///
/// Implementations return `Err` for every kind of failure (transport, status,
/// parse); the dispatcher decides what to do with it.
#[async_trait]
pub trait HashtagService: Send + Sync {
    async fn generate(&self, request: &GenerateRequest, credential: &str)
        -> Result<GenerateResponse>;
}
