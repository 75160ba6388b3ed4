use crate::domain::model::{EmbedElement, NodeHandle};
use crate::utils::error::{EmbedError, Result};

/// Upstream gist endpoint. `fetch` resolves with the raw JSON-P body that
/// the remote script would have executed.
pub trait GistSource: Send + Sync {
    fn fetch(
        &self,
        gist_id: &str,
        callback: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Host-supplied DOM capability. The embedder only ever creates elements and
/// inserts siblings; traversal of the rendered gist markup stays internal.
pub trait DomHost: Send + Sync {
    /// Handle of the invoking script element. The first insertion of an
    /// invocation anchors directly after it.
    fn anchor(&self) -> NodeHandle;

    /// Inserts `element` as the immediate next sibling of `anchor` and
    /// returns the new node's handle.
    fn insert_after(&self, anchor: NodeHandle, element: EmbedElement) -> Result<NodeHandle>;
}

/// Receives the deferred per-file failures, one call per failure, each on its
/// own scheduling turn.
pub trait FailureSink: Send + Sync {
    fn report(&self, failure: EmbedError);
}
