//! Identifier normalization.

use jsnames_ast::{Node, NodeArena, NodeIndex};
use tracing::trace;

/// Normalize `node` to the `Identifier` it most directly names.
///
/// A `CallExpression` is replaced by its callee. A `MemberExpression` is then
/// unwrapped once: to its `property` for dotted access (`a.b` names `b`), or to
/// its `object` for computed access (`a[b]` names `a`, since the index
/// expression is not a name). Longer chains are not walked; see
/// [`resolve_full_name`](crate::resolve_full_name) for that.
///
/// Returns `None` when the result is not an `Identifier`.
pub fn resolve_identifier(arena: &NodeArena, node: NodeIndex) -> Option<NodeIndex> {
    debug_assert!(arena.get(node).is_some(), "invalid node handle {node:?}");

    let mut current = node;
    if let Some(Node::CallExpression(call)) = arena.get(current) {
        current = call.callee;
    }
    if let Some(Node::MemberExpression(member)) = arena.get(current) {
        current = if member.computed {
            member.object
        } else {
            member.property
        };
    }

    match arena.get(current) {
        Some(Node::Identifier(_)) => Some(current),
        other => {
            trace!(
                ?node,
                reached = other.map(Node::type_name),
                "node does not resolve to an identifier"
            );
            None
        }
    }
}

/// Name of the identifier `node` refers to, `"this"` for a `ThisExpression`,
/// or `""` when there is no name.
pub fn resolve_node_name(arena: &NodeArena, node: NodeIndex) -> &str {
    if let Some(Node::ThisExpression(_)) = arena.get(node) {
        return "this";
    }
    resolve_identifier(arena, node)
        .and_then(|ident| arena.identifier_name(ident))
        .unwrap_or("")
}
