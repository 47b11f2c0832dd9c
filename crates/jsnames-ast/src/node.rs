//! AST node definitions.
//!
//! `Node` is a tagged union over the ESTree node kinds the analysis cares about.
//! Child fields are [`NodeIndex`] handles into the owning arena; `NONE` marks an
//! absent optional child. Kinds that are not modelled explicitly are kept as
//! [`Node::Other`] so that parent links through them still work.

use crate::base::{NodeBase, NodeIndex, NodeList};
use serde::Serialize;

/// Discriminant of a [`Node`], usable without borrowing node data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    BlockStatement,
    ReturnStatement,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    ThisExpression,
    Literal,
    MemberExpression,
    CallExpression,
    NewExpression,
    FunctionExpression,
    FunctionDeclaration,
    ArrowFunctionExpression,
    AssignmentExpression,
    Property,
    ObjectExpression,
    ArrayExpression,
    ConditionalExpression,
    Other,
}

impl NodeKind {
    /// The ESTree `type` string for this kind. `Other` has no fixed name.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::Identifier => "Identifier",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::Literal => "Literal",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::Property => "Property",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::Other => "Other",
        }
    }

    /// Function expressions, declarations and arrows.
    #[inline]
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionExpression
                | NodeKind::FunctionDeclaration
                | NodeKind::ArrowFunctionExpression
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node with no fields beyond its base (`this`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub base: NodeBase,
}

impl Token {
    pub fn new(pos: u32, end: u32) -> Token {
        Token {
            base: NodeBase::new(pos, end),
        }
    }
}

/// `foo`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub base: NodeBase,
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>, pos: u32, end: u32) -> Identifier {
        let name = name.into();
        debug_assert!(!name.is_empty(), "identifier names are never empty");
        Identifier {
            base: NodeBase::new(pos, end),
            name,
        }
    }
}

/// Any literal; only the raw source text is kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Literal {
    pub base: NodeBase,
    pub raw: String,
}

/// `object.property` or `object[property]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberExpression {
    pub base: NodeBase,
    pub object: NodeIndex,
    pub property: NodeIndex,
    /// `true` for bracket access (`a[b]`)
    pub computed: bool,
}

/// Shared by `CallExpression` and `NewExpression`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub base: NodeBase,
    pub callee: NodeIndex,
    pub arguments: NodeList,
}

/// Shared by function expressions, declarations and arrows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Function {
    pub base: NodeBase,
    /// Own name; `NONE` for anonymous functions and arrows.
    pub id: NodeIndex,
    pub params: NodeList,
    /// A block, or an expression for concise arrows.
    pub body: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
    Using,
    AwaitUsing,
}

impl DeclarationKind {
    pub fn parse(text: &str) -> Option<DeclarationKind> {
        match text {
            "var" => Some(DeclarationKind::Var),
            "let" => Some(DeclarationKind::Let),
            "const" => Some(DeclarationKind::Const),
            "using" => Some(DeclarationKind::Using),
            "await using" => Some(DeclarationKind::AwaitUsing),
            _ => None,
        }
    }
}

/// `var a = 1, b;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariableDeclaration {
    pub base: NodeBase,
    pub kind: DeclarationKind,
    pub declarations: NodeList,
}

/// One `id = init` entry of a variable declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariableDeclarator {
    pub base: NodeBase,
    pub id: NodeIndex,
    pub init: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssignmentExpression {
    pub base: NodeBase,
    /// `=`, `+=`, ...
    pub operator: String,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// `key: value` inside an object literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Property {
    pub base: NodeBase,
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectExpression {
    pub base: NodeBase,
    pub properties: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArrayExpression {
    pub base: NodeBase,
    pub elements: NodeList,
}

/// `test ? consequent : alternate`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConditionalExpression {
    pub base: NodeBase,
    pub test: NodeIndex,
    pub consequent: NodeIndex,
    pub alternate: NodeIndex,
}

/// A statement list: `Program` or `BlockStatement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatementList {
    pub base: NodeBase,
    pub body: NodeList,
}

/// A node wrapping one optional expression: `ExpressionStatement`, `ReturnStatement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Wrapper {
    pub base: NodeBase,
    pub expression: NodeIndex,
}

/// An ESTree node type with no dedicated variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtherNode {
    pub base: NodeBase,
    pub type_name: String,
    pub children: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program(StatementList),
    ExpressionStatement(Wrapper),
    BlockStatement(StatementList),
    ReturnStatement(Wrapper),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    Identifier(Identifier),
    ThisExpression(Token),
    Literal(Literal),
    MemberExpression(MemberExpression),
    CallExpression(CallExpression),
    NewExpression(CallExpression),
    FunctionExpression(Function),
    FunctionDeclaration(Function),
    ArrowFunctionExpression(Function),
    AssignmentExpression(AssignmentExpression),
    Property(Property),
    ObjectExpression(ObjectExpression),
    ArrayExpression(ArrayExpression),
    ConditionalExpression(ConditionalExpression),
    Other(OtherNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::BlockStatement(_) => NodeKind::BlockStatement,
            Node::ReturnStatement(_) => NodeKind::ReturnStatement,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Node::VariableDeclarator(_) => NodeKind::VariableDeclarator,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::ThisExpression(_) => NodeKind::ThisExpression,
            Node::Literal(_) => NodeKind::Literal,
            Node::MemberExpression(_) => NodeKind::MemberExpression,
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::NewExpression(_) => NodeKind::NewExpression,
            Node::FunctionExpression(_) => NodeKind::FunctionExpression,
            Node::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Node::ArrowFunctionExpression(_) => NodeKind::ArrowFunctionExpression,
            Node::AssignmentExpression(_) => NodeKind::AssignmentExpression,
            Node::Property(_) => NodeKind::Property,
            Node::ObjectExpression(_) => NodeKind::ObjectExpression,
            Node::ArrayExpression(_) => NodeKind::ArrayExpression,
            Node::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Node::Other(_) => NodeKind::Other,
        }
    }

    /// ESTree `type` string, including the original name of `Other` nodes.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Other(other) => &other.type_name,
            _ => self.kind().as_str(),
        }
    }

    pub fn base(&self) -> &NodeBase {
        match self {
            Node::Program(n) | Node::BlockStatement(n) => &n.base,
            Node::ExpressionStatement(n) | Node::ReturnStatement(n) => &n.base,
            Node::VariableDeclaration(n) => &n.base,
            Node::VariableDeclarator(n) => &n.base,
            Node::Identifier(n) => &n.base,
            Node::ThisExpression(n) => &n.base,
            Node::Literal(n) => &n.base,
            Node::MemberExpression(n) => &n.base,
            Node::CallExpression(n) | Node::NewExpression(n) => &n.base,
            Node::FunctionExpression(n)
            | Node::FunctionDeclaration(n)
            | Node::ArrowFunctionExpression(n) => &n.base,
            Node::AssignmentExpression(n) => &n.base,
            Node::Property(n) => &n.base,
            Node::ObjectExpression(n) => &n.base,
            Node::ArrayExpression(n) => &n.base,
            Node::ConditionalExpression(n) => &n.base,
            Node::Other(n) => &n.base,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Node::Program(n) | Node::BlockStatement(n) => &mut n.base,
            Node::ExpressionStatement(n) | Node::ReturnStatement(n) => &mut n.base,
            Node::VariableDeclaration(n) => &mut n.base,
            Node::VariableDeclarator(n) => &mut n.base,
            Node::Identifier(n) => &mut n.base,
            Node::ThisExpression(n) => &mut n.base,
            Node::Literal(n) => &mut n.base,
            Node::MemberExpression(n) => &mut n.base,
            Node::CallExpression(n) | Node::NewExpression(n) => &mut n.base,
            Node::FunctionExpression(n)
            | Node::FunctionDeclaration(n)
            | Node::ArrowFunctionExpression(n) => &mut n.base,
            Node::AssignmentExpression(n) => &mut n.base,
            Node::Property(n) => &mut n.base,
            Node::ObjectExpression(n) => &mut n.base,
            Node::ArrayExpression(n) => &mut n.base,
            Node::ConditionalExpression(n) => &mut n.base,
            Node::Other(n) => &mut n.base,
        }
    }

    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.base().parent
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.base().pos
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.base().end
    }

    /// Function data for the three function-like variants.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Node::FunctionExpression(func)
            | Node::FunctionDeclaration(func)
            | Node::ArrowFunctionExpression(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// Owned children in source order. Absent children (`NONE`) are skipped.
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut children = Vec::new();

        let add_opt = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        let add_list = |children: &mut Vec<NodeIndex>, list: &NodeList| {
            children.extend(list.iter().filter(|idx| idx.is_some()));
        };

        match self {
            Node::Program(list) | Node::BlockStatement(list) => {
                add_list(&mut children, &list.body);
            }
            Node::ExpressionStatement(wrapper) | Node::ReturnStatement(wrapper) => {
                add_opt(&mut children, wrapper.expression);
            }
            Node::VariableDeclaration(decl) => {
                add_list(&mut children, &decl.declarations);
            }
            Node::VariableDeclarator(decl) => {
                add_opt(&mut children, decl.id);
                add_opt(&mut children, decl.init);
            }
            Node::MemberExpression(expr) => {
                add_opt(&mut children, expr.object);
                add_opt(&mut children, expr.property);
            }
            Node::CallExpression(expr) | Node::NewExpression(expr) => {
                add_opt(&mut children, expr.callee);
                add_list(&mut children, &expr.arguments);
            }
            Node::FunctionExpression(func)
            | Node::FunctionDeclaration(func)
            | Node::ArrowFunctionExpression(func) => {
                add_opt(&mut children, func.id);
                add_list(&mut children, &func.params);
                add_opt(&mut children, func.body);
            }
            Node::AssignmentExpression(expr) => {
                add_opt(&mut children, expr.left);
                add_opt(&mut children, expr.right);
            }
            Node::Property(prop) => {
                add_opt(&mut children, prop.key);
                add_opt(&mut children, prop.value);
            }
            Node::ObjectExpression(obj) => {
                add_list(&mut children, &obj.properties);
            }
            Node::ArrayExpression(arr) => {
                add_list(&mut children, &arr.elements);
            }
            Node::ConditionalExpression(expr) => {
                add_opt(&mut children, expr.test);
                add_opt(&mut children, expr.consequent);
                add_opt(&mut children, expr.alternate);
            }
            Node::Other(other) => {
                add_list(&mut children, &other.children);
            }
            // Leaves
            Node::Identifier(_) | Node::ThisExpression(_) | Node::Literal(_) => {}
        }

        children
    }
}
