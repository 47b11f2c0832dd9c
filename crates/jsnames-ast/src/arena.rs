//! Node arena for AST storage.

use crate::base::NodeIndex;
use crate::node::{Identifier, Node, NodeKind};
use serde::Serialize;

/// Arena-based storage for AST nodes.
///
/// Nodes are stored contiguously and referenced by index. Ownership flows from
/// parent to child through the handles stored in each node; the `parent` field
/// of a node is a back-reference for upward walks only.
///
/// Trees are built bottom-up: a node can only be added after all of its
/// children, and [`NodeArena::add`] links those children to the new node.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena, set the parent of each of its children, and
    /// return its index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        debug_assert!(index.is_some(), "arena exhausted the index space");

        let children = node.children();
        self.nodes.push(node);

        for child in children {
            self.set_parent(child, index);
        }

        index
    }

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        debug_assert!(
            child < parent,
            "child {child:?} must be added before its parent {parent:?}"
        );
        if let Some(node) = self.nodes.get_mut(child.0 as usize) {
            let base = node.base_mut();
            debug_assert!(
                base.parent.is_none(),
                "node {child:?} already owned by {:?}",
                base.parent
            );
            base.parent = parent;
        }
    }

    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(Node::kind)
    }

    /// ESTree `type` string of a node.
    pub fn kind_name(&self, index: NodeIndex) -> Option<&str> {
        self.get(index).map(Node::type_name)
    }

    pub fn get_identifier(&self, index: NodeIndex) -> Option<&Identifier> {
        self.get(index)?.as_identifier()
    }

    /// Get identifier text (if this is an identifier node)
    pub fn identifier_name(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier(index).map(|ident| ident.name.as_str())
    }

    /// Parent of a node, or `None` for the root and for invalid handles.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index)?.parent().into_option()
    }

    /// Get children of a node (for traversal)
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        match self.get(index) {
            Some(node) => node.children(),
            None => Vec::new(),
        }
    }

    /// Walk from `index` (inclusive) up to the root.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: index,
            steps: 0,
        }
    }

    /// All nodes of the subtree rooted at `root`, parents before children,
    /// children in source order.
    pub fn preorder(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            if self.get(idx).is_none() {
                continue;
            }
            out.push(idx);
            let children = self.get_children(idx);
            stack.extend(children.into_iter().rev());
        }
        out
    }
}

/// Iterator returned by [`NodeArena::ancestors`].
///
/// Stops at the root or at an invalid handle. Every parent is added after its
/// children, so a walk visits at most `arena.len()` nodes however deep the
/// tree is; a longer walk means a corrupt parent link and ends early.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
    steps: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let node = self.arena.get(self.current)?;
        if self.steps >= self.arena.len() {
            tracing::debug!(at = ?self.current, "ancestor walk longer than the arena");
            self.current = NodeIndex::NONE;
            return None;
        }
        self.steps += 1;
        let idx = self.current;
        self.current = node.parent();
        Some(idx)
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod arena_tests;
