// Hashtagger: hashtag suggestions for a topic.
//
// This is the library root. `tags` is the offline generator, `remote` the
// HTTP client for the hashtag API, and `dispatch` picks between the two.

pub mod config;
pub mod dispatch;
pub mod output;
pub mod remote;
pub mod tags;

#[cfg(feature = "web")]
pub mod web;
