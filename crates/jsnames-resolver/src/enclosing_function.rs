use jsnames_ast::{Node, NodeArena, NodeIndex};
use tracing::trace;

/// Find the nearest function-like ancestor of `node` (the node itself
/// included) and return the node that names it.
///
/// - A named function (`function foo() {}`) is named by its own `id`.
/// - An anonymous function directly initializing a variable
///   (`var bar = function () {}`) is named by the declarator's `id`.
/// - An anonymous function directly assigned (`obj.cb = () => {}`) is named by
///   the assignment's `left`, which may be a member expression.
///
/// Returns `None` at top level, and for anonymous functions in any other
/// position (e.g. passed as an argument).
pub fn resolve_enclosing_function_name(arena: &NodeArena, node: NodeIndex) -> Option<NodeIndex> {
    debug_assert!(arena.get(node).is_some(), "invalid node handle {node:?}");

    let (func_idx, func) = arena.ancestors(node).find_map(|idx| {
        let func = arena.get(idx)?.as_function()?;
        Some((idx, func))
    })?;

    if func.id.is_some() {
        return Some(func.id);
    }

    let parent = arena.parent_of(func_idx)?;
    match arena.get(parent)? {
        Node::VariableDeclarator(decl) => decl.id.into_option(),
        Node::AssignmentExpression(assign) => assign.left.into_option(),
        other => {
            trace!(
                function = ?func_idx,
                parent = other.type_name(),
                "anonymous function has no assignment target"
            );
            None
        }
    }
}
