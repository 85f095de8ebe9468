// Remote hashtag generation — trait-based abstraction over the HTTP endpoint.
//
// The HashtagService trait is what the dispatcher talks to. RemoteClient
// implements it with reqwest; tests swap in stubs without a network.

pub mod client;
pub mod traits;
