use jsnames_ast::{Node, NodeArena, NodeIndex};

/// Whether `node` sits in a position of `containing_expr` through which data
/// flows into or out of that expression.
///
/// Positions are compared by handle, so a structurally identical node elsewhere
/// in the tree never matches.
///
/// | containing expression | operand positions |
/// |---|---|
/// | `CallExpression` | `arguments` |
/// | `AssignmentExpression` | `right` |
/// | `VariableDeclarator` | `init` |
/// | `Property` | `value` |
/// | `ArrayExpression` | `elements` |
/// | `FunctionExpression` | none |
/// | `ConditionalExpression` | `consequent`, `alternate` (not `test`) |
/// | `ArrowFunctionExpression` | `body` |
/// | anything else | every position |
pub fn is_operand(arena: &NodeArena, node: NodeIndex, containing_expr: NodeIndex) -> bool {
    debug_assert!(
        arena.get(containing_expr).is_some(),
        "invalid containing expression handle {containing_expr:?}"
    );
    let Some(container) = arena.get(containing_expr) else {
        return true;
    };

    match container {
        Node::CallExpression(call) => call.arguments.contains(node),
        Node::AssignmentExpression(assign) => assign.right == node,
        Node::VariableDeclarator(decl) => decl.init == node,
        Node::Property(prop) => prop.value == node,
        Node::ArrayExpression(arr) => arr.elements.contains(node),
        Node::FunctionExpression(_) => false,
        Node::ConditionalExpression(cond) => cond.consequent == node || cond.alternate == node,
        Node::ArrowFunctionExpression(func) => func.body == node,

        // No rule for these: the node is assumed to pass through.
        Node::Program(_)
        | Node::ExpressionStatement(_)
        | Node::BlockStatement(_)
        | Node::ReturnStatement(_)
        | Node::VariableDeclaration(_)
        | Node::Identifier(_)
        | Node::ThisExpression(_)
        | Node::Literal(_)
        | Node::MemberExpression(_)
        | Node::NewExpression(_)
        | Node::FunctionDeclaration(_)
        | Node::ObjectExpression(_)
        | Node::Other(_) => true,
    }
}
