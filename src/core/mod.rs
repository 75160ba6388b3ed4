pub mod callback;
pub mod data_uri;
pub mod embedder;
pub mod injector;
pub mod selector;
pub mod source;

pub use crate::domain::model::{
    AssetKind, DeferredFailure, EmbedElement, EmbedOutcome, EmbedRequest, GistPayload, NodeHandle,
};
pub use crate::domain::ports::{DomHost, FailureSink, GistSource};
pub use crate::utils::error::Result;
