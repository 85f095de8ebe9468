// Local hashtag generation — static category table, sampling, and the
// offline heuristic that turns a topic into a hashtag list.

pub mod categories;
pub mod format;
pub mod local;
pub mod sampler;
