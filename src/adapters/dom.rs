use crate::domain::model::{EmbedElement, NodeHandle};
use crate::domain::ports::DomHost;
use crate::utils::error::{EmbedError, Result};
use std::sync::Mutex;

/// In-memory sibling list standing in for a browser DOM.
///
/// Holds the invoking script element at the front (handle 0) and keeps every
/// embedded node in document order after it. A browser-backed host would map
/// handles to real nodes; the engine only ever hands handles back verbatim.
#[derive(Debug, Default)]
pub struct MemoryDom {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// `(handle, element)`; `None` marks the invoking script element.
    nodes: Vec<(NodeHandle, Option<EmbedElement>)>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            nodes: vec![(NodeHandle(0), None)],
            next_id: 1,
        }
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embedded elements in document order, the invoking element excluded.
    pub fn elements(&self) -> Vec<EmbedElement> {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .iter()
            .filter_map(|(_, element)| element.clone())
            .collect()
    }

    pub fn element(&self, handle: NodeHandle) -> Option<EmbedElement> {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .iter()
            .find(|(h, _)| *h == handle)
            .and_then(|(_, element)| element.clone())
    }
}

impl DomHost for MemoryDom {
    fn anchor(&self) -> NodeHandle {
        NodeHandle(0)
    }

    fn insert_after(&self, anchor: NodeHandle, element: EmbedElement) -> Result<NodeHandle> {
        let mut inner = self.inner.lock().unwrap();
        let position = inner
            .nodes
            .iter()
            .position(|(handle, _)| *handle == anchor)
            .ok_or_else(|| EmbedError::DomError {
                reason: format!("no node with handle {}", anchor.0),
            })?;

        let handle = NodeHandle(inner.next_id);
        inner.next_id += 1;
        inner.nodes.insert(position + 1, (handle, Some(element)));
        Ok(handle)
    }
}
