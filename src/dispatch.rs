// Remote-or-local dispatcher.
//
// With a credential, asks the remote service first and normalizes its answer.
// Without one, or when the remote call fails in any way, the local generator
// answers instead. Failures never escape: they come back as a notice on the
// Generation so callers can tell the user which source was used.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::remote::client::RemoteClient;
use crate::remote::traits::{GenerateRequest, HashtagService};
use crate::tags::format::finalize;
use crate::tags::local::LocalGenerator;

/// Where a hashtag list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Local,
}

/// A finished hashtag generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    pub hashtags: Vec<String>,
    pub source: Source,
    /// Why the remote service wasn't used, when a credential was supplied but the call failed.
    pub notice: Option<String>,
}

impl Generation {
    fn local(hashtags: Vec<String>, notice: Option<String>) -> Self {
        Self {
            hashtags,
            source: Source::Local,
            notice,
        }
    }

    /// True when a remote attempt failed and local generation stood in.
    pub fn fell_back(&self) -> bool {
        self.notice.is_some()
    }

    pub fn into_hashtags(self) -> Vec<String> {
        self.hashtags
    }
}

pub struct Dispatcher {
    remote: Box<dyn HashtagService>,
    local: LocalGenerator,
    language: String,
}

impl Dispatcher {
    pub fn new(remote: Box<dyn HashtagService>, local: LocalGenerator, language: &str) -> Self {
        Self {
            remote,
            local,
            language: language.to_string(),
        }
    }

    /// Build a dispatcher that talks to the configured endpoint with a random sampler.
    pub fn from_config(config: &Config) -> Result<Self> {
        let remote = RemoteClient::new(&config.api_url)?;
        Ok(Self::new(
            Box::new(remote),
            LocalGenerator::default(),
            &config.language,
        ))
    }

    /// Replace the local generator (e.g. with a seeded one).
    pub fn with_local(mut self, local: LocalGenerator) -> Self {
        self.local = local;
        self
    }

    /// Generate up to `count` hashtags for `topic`.
    pub async fn generate(
        &self,
        topic: &str,
        credential: Option<&str>,
        count: usize,
    ) -> Generation {
        if topic.trim().is_empty() {
            return Generation::local(Vec::new(), None);
        }

        // Blank keys mean "no key"; anything else is forwarded untouched
        let credential = match credential.filter(|c| !c.trim().is_empty()) {
            Some(credential) => credential,
            None => {
                info!(topic = topic, "Generating hashtags locally (no API key)");
                return Generation::local(self.local.generate(topic, count), None);
            }
        };

        info!(topic = topic, "Generating hashtags via API");
        match self.generate_remote(topic, credential, count).await {
            Ok(hashtags) => Generation {
                hashtags,
                source: Source::Remote,
                notice: None,
            },
            Err(e) => {
                warn!(
                    topic = topic,
                    error = %e,
                    "Hashtag API failed, falling back to local generation"
                );
                let hashtags = self.local.generate(topic, count);
                Generation::local(hashtags, Some(format!("{e:#}")))
            }
        }
    }

    async fn generate_remote(
        &self,
        topic: &str,
        credential: &str,
        count: usize,
    ) -> Result<Vec<String>> {
        let request = GenerateRequest {
            topic: topic.to_string(),
            count,
            include_trending: true,
            language: self.language.clone(),
        };

        let response = self.remote.generate(&request, credential).await?;
        if let Some(error) = response.logical_error() {
            anyhow::bail!("Hashtag API reported an error: {error}");
        }

        Ok(finalize(response.all_tags(), count))
    }
}

/// Caller-facing shorthand: just the hashtags, whichever source produced them.
pub async fn generate_hashtags(
    dispatcher: &Dispatcher,
    topic: &str,
    credential: Option<&str>,
    count: usize,
) -> Vec<String> {
    dispatcher
        .generate(topic, credential, count)
        .await
        .into_hashtags()
}
