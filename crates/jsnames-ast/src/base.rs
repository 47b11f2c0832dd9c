//! Base handle types shared by every node.

use serde::Serialize;

/// Handle to a node stored in a [`NodeArena`](crate::NodeArena).
///
/// Handles are the identity of a node: two handles are equal iff they name the
/// same slot, regardless of what the nodes look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for an absent node (missing child, parent of the root).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub const fn into_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

impl From<Option<NodeIndex>> for NodeIndex {
    fn from(value: Option<NodeIndex>) -> Self {
        value.unwrap_or(NodeIndex::NONE)
    }
}

/// An ordered list of child nodes (call arguments, array elements, statements).
///
/// Entries may be [`NodeIndex::NONE`] where the source has a hole, e.g. the
/// elision in `[a, , b]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identity membership test.
    #[inline]
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.nodes.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList { nodes }
    }
}

impl FromIterator<NodeIndex> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeIndex>>(iter: I) -> Self {
        NodeList {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Fields present on every node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeBase {
    pub pos: u32,          // Start offset in the source (0 if unknown)
    pub end: u32,          // End offset in the source (0 if unknown)
    pub parent: NodeIndex, // Set by the arena when the parent is added
}

impl Default for NodeBase {
    fn default() -> Self {
        NodeBase {
            pos: 0,
            end: 0,
            parent: NodeIndex::NONE,
        }
    }
}

impl NodeBase {
    pub fn new(pos: u32, end: u32) -> NodeBase {
        NodeBase {
            pos,
            end,
            parent: NodeIndex::NONE,
        }
    }
}
