use crate::utils::error::EmbedError;
use serde::Deserialize;

/// One embedding request, derived once from the invoking script's URL and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    pub gist_id: String,
    /// File names in caller order, duplicates allowed. May carry a `#js` or
    /// `#css` suffix forcing the asset type.
    pub chosen_files: Vec<String>,
}

/// The object GitHub's JSON-P endpoint hands to the registered callback.
#[derive(Debug, Clone, Deserialize)]
pub struct GistPayload {
    /// All file names in the gist, index-aligned with the blocks in `div`.
    pub files: Vec<String>,
    /// HTML fragment containing one rendered block per file.
    pub div: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    pub fn mime(&self) -> &'static str {
        match self {
            AssetKind::Script => "text/javascript",
            AssetKind::Stylesheet => "text/css",
        }
    }
}

/// A `<script>` or `<link rel="stylesheet">` node ready for insertion,
/// tagged with its gist id and requested file name for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedElement {
    pub kind: AssetKind,
    /// `data:` URI carrying the reconstructed source.
    pub uri: String,
    pub gist_id: String,
    /// The requested name verbatim, forced-type suffix included.
    pub file_name: String,
}

/// Opaque reference to a node owned by the host DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// A failure deferred to its own scheduling turn so it cannot block other
/// files from being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredFailure {
    MissingFile { file: String },
    NoEmbeddableFiles,
}

impl From<DeferredFailure> for EmbedError {
    fn from(failure: DeferredFailure) -> Self {
        match failure {
            DeferredFailure::MissingFile { file } => EmbedError::MissingFile { file },
            DeferredFailure::NoEmbeddableFiles => EmbedError::NoEmbeddableFiles,
        }
    }
}

/// What one invocation produced: insertions in document order plus the
/// failures that were dispatched to the sink.
#[derive(Debug)]
pub struct EmbedOutcome {
    pub inserted: Vec<(NodeHandle, EmbedElement)>,
    pub failures: Vec<DeferredFailure>,
}
