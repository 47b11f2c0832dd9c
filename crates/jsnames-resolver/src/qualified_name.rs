//! Dotted names for member-access and call chains.

use crate::identifier::resolve_identifier;
use jsnames_ast::{Node, NodeArena, NodeIndex};
use tracing::trace;

/// A `CallExpression` stands for its callee.
#[inline]
fn unwrap_call(arena: &NodeArena, node: NodeIndex) -> NodeIndex {
    match arena.get(node) {
        Some(Node::CallExpression(call)) => call.callee,
        _ => node,
    }
}

/// Qualified name of a call or member chain: `a.b.c` for both `a.b.c()` and
/// `a.b.c`.
///
/// Each member contributes its property name, read without regard to
/// `computed`. A property that is not an `Identifier` (as in `a[0].b`)
/// contributes an empty segment, giving `"a..b"`. A chain whose base is not an
/// `Identifier` (`f().x.y`, `this.x`) contributes nothing for the base, so the
/// result starts mid-chain: `"x.y"`, `"x"`.
pub fn resolve_full_name(arena: &NodeArena, func: NodeIndex) -> String {
    debug_assert!(arena.get(func).is_some(), "invalid node handle {func:?}");

    let mut segments: Vec<&str> = Vec::new();
    let mut current = unwrap_call(arena, func);

    while let Some(Node::MemberExpression(member)) = arena.get(current) {
        let segment = arena.identifier_name(member.property).unwrap_or_else(|| {
            trace!(
                property = ?member.property,
                kind = arena.kind_name(member.property),
                "non-identifier property in member chain; using empty segment"
            );
            ""
        });
        segments.push(segment);
        current = member.object;
    }

    if let Some(name) = arena.identifier_name(current) {
        segments.push(name);
    }

    segments.reverse();
    segments.join(".")
}

/// Last segment of a call or member chain.
///
/// Returns `Some(".c")` for `a.b.c()` and `Some("f")` for `f()`: the leading dot
/// marks member access. Returns `None` when no identifier can be resolved,
/// which is distinct from any resolved name.
pub fn resolve_partial_name(arena: &NodeArena, func: NodeIndex) -> Option<String> {
    debug_assert!(arena.get(func).is_some(), "invalid node handle {func:?}");

    let target = unwrap_call(arena, func);
    let is_member = matches!(arena.get(target), Some(Node::MemberExpression(_)));

    let ident = resolve_identifier(arena, target)?;
    let name = arena.identifier_name(ident)?;
    Some(if is_member {
        format!(".{name}")
    } else {
        name.to_string()
    })
}
