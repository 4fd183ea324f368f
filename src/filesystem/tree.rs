use tracing::debug;

use crate::filesystem::{Node, ROOT_MARKER};

/// The whole simulated filesystem, owned from its root directory.
///
/// There are no back-edges: every lookup walks down from the root following
/// the segments of an absolute location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    root: Node,
}

impl FileTree {
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            root: Node::directory(ROOT_MARKER, children),
        }
    }

    /// Finds the node addressed by `segments`, matching names exactly.
    pub fn lookup(&self, segments: &[String]) -> Option<&Node> {
        let mut current = &self.root;

        for name in segments.iter().skip(1) {
            current = match current {
                Node::Directory { children, .. } => children.get(name)?,
                Node::File { .. } => return None,
            };
        }

        debug!("Found '{}' at {:?}", current.name(), segments);
        Some(current)
    }

    pub fn lookup_mut(&mut self, segments: &[String]) -> Option<&mut Node> {
        let mut current = &mut self.root;

        for name in segments.iter().skip(1) {
            current = match current {
                Node::Directory { children, .. } => children.get_mut(name)?,
                Node::File { .. } => return None,
            };
        }

        Some(current)
    }
}
