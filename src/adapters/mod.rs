// Adapters layer: concrete implementations for external systems (the gist
// endpoint, the host DOM, the failure channel).

pub mod dom;
pub mod github;
pub mod sink;

pub use dom::MemoryDom;
pub use github::GithubGistSource;
pub use sink::TracingSink;
