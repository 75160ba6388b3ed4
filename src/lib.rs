pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{GithubGistSource, MemoryDom, TracingSink};
pub use crate::core::embedder::GistEmbedder;
pub use crate::domain::model::{
    AssetKind, DeferredFailure, EmbedElement, EmbedOutcome, EmbedRequest, GistPayload, NodeHandle,
};
pub use crate::domain::ports::{DomHost, FailureSink, GistSource};
pub use crate::utils::error::{EmbedError, Result};
