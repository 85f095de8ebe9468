// Offline hashtag generator.
//
// Builds candidates from the topic itself (compound tag, individual words,
// suffix variations for single-word topics), then pads them with tags drawn
// from the first matching category and from the popular pool.

use tracing::debug;

use super::categories::{popular, relevant_category};
use super::format::finalize;
use super::sampler::{sample, RandomSampler, Sampler};

/// Default number of hashtags returned when the caller doesn't ask for a count.
pub const DEFAULT_COUNT: usize = 30;

/// Tags drawn from the matched category.
const RELEVANT_SAMPLE: usize = 15;

/// Tags drawn from the popular pool on every call.
const POPULAR_SAMPLE: usize = 10;

/// Suffixes appended to a single-word topic ("coffee" -> "coffeelove", ...).
pub const COMPOUND_SUFFIXES: [&str; 12] = [
    "love",
    "life",
    "lover",
    "addict",
    "fan",
    "world",
    "daily",
    "gram",
    "goals",
    "nation",
    "community",
    "style",
];

/// Heuristic hashtag generator backed by the static category table.
pub struct LocalGenerator {
    sampler: Box<dyn Sampler>,
}

impl Default for LocalGenerator {
    fn default() -> Self {
        Self::new(Box::new(RandomSampler))
    }
}

impl LocalGenerator {
    pub fn new(sampler: Box<dyn Sampler>) -> Self {
        Self { sampler }
    }

    /// Generate up to `count` unique `#`-prefixed hashtags for `topic`.
    ///
    /// A blank topic yields an empty list.
    pub fn generate(&self, topic: &str, count: usize) -> Vec<String> {
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() {
            return Vec::new();
        }

        let words: Vec<&str> = topic.split_whitespace().collect();
        let mut candidates: Vec<String> = Vec::new();

        candidates.push(words.concat());
        candidates.extend(
            words
                .iter()
                .filter(|w| w.chars().count() > 2)
                .map(|w| w.to_string()),
        );

        if let [word] = words.as_slice() {
            if word.chars().count() > 3 {
                candidates.extend(
                    COMPOUND_SUFFIXES
                        .iter()
                        .map(|suffix| format!("{word}{suffix}")),
                );
            }
        }

        // One RNG for both draws so the popular draw isn't a replay of the first
        let mut rng = self.sampler.rng();

        let category = relevant_category(&topic);
        if let Some(category) = category {
            candidates.extend(
                sample(category.tags, RELEVANT_SAMPLE, &mut *rng)
                    .into_iter()
                    .map(String::from),
            );
        }

        candidates.extend(
            sample(popular().tags, POPULAR_SAMPLE, &mut *rng)
                .into_iter()
                .map(String::from),
        );

        debug!(
            topic = %topic,
            category = category.map(|c| c.name),
            candidates = candidates.len(),
            "Generated local hashtag candidates"
        );

        finalize(candidates, count)
    }
}
