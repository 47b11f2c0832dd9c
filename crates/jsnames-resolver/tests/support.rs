//! Tree construction helpers for resolver tests.
//!
//! Nodes are added bottom-up, as a parser would, so every helper takes the
//! handles of already-built children.

use jsnames_ast::node::*;
use jsnames_ast::{NodeArena, NodeBase, NodeIndex, NodeList};

#[derive(Default)]
pub(crate) struct TreeBuilder {
    pub arena: NodeArena,
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder::default()
    }

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        self.arena.add(Node::Identifier(Identifier::new(name, 0, 0)))
    }

    pub fn this(&mut self) -> NodeIndex {
        self.arena.add(Node::ThisExpression(Token::new(0, 0)))
    }

    pub fn literal(&mut self, raw: &str) -> NodeIndex {
        self.arena.add(Node::Literal(Literal {
            base: NodeBase::default(),
            raw: raw.to_string(),
        }))
    }

    fn member_expr(&mut self, object: NodeIndex, property: NodeIndex, computed: bool) -> NodeIndex {
        self.arena.add(Node::MemberExpression(MemberExpression {
            base: NodeBase::default(),
            object,
            property,
            computed,
        }))
    }

    /// `object.name`
    pub fn member(&mut self, object: NodeIndex, name: &str) -> NodeIndex {
        let property = self.ident(name);
        self.member_expr(object, property, false)
    }

    /// `object[property]`
    pub fn computed(&mut self, object: NodeIndex, property: NodeIndex) -> NodeIndex {
        self.member_expr(object, property, true)
    }

    /// `names[0].names[1]...`; a single name gives a bare identifier.
    pub fn chain(&mut self, names: &[&str]) -> NodeIndex {
        let (first, rest) = names.split_first().expect("chain needs at least one name");
        let mut current = self.ident(first);
        for name in rest {
            current = self.member(current, name);
        }
        current
    }

    pub fn call(&mut self, callee: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::CallExpression(CallExpression {
            base: NodeBase::default(),
            callee,
            arguments: arguments.iter().copied().collect(),
        }))
    }

    pub fn new_expr(&mut self, callee: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::NewExpression(CallExpression {
            base: NodeBase::default(),
            callee,
            arguments: arguments.iter().copied().collect(),
        }))
    }

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        self.arena.add(Node::ExpressionStatement(Wrapper {
            base: NodeBase::default(),
            expression,
        }))
    }

    pub fn ret(&mut self, argument: NodeIndex) -> NodeIndex {
        self.arena.add(Node::ReturnStatement(Wrapper {
            base: NodeBase::default(),
            expression: argument,
        }))
    }

    pub fn block(&mut self, statements: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::BlockStatement(StatementList {
            base: NodeBase::default(),
            body: statements.iter().copied().collect(),
        }))
    }

    pub fn program(&mut self, statements: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::Program(StatementList {
            base: NodeBase::default(),
            body: statements.iter().copied().collect(),
        }))
    }

    fn function(&mut self, id: NodeIndex, params: &[NodeIndex], body: NodeIndex) -> Function {
        Function {
            base: NodeBase::default(),
            id,
            params: params.iter().copied().collect(),
            body,
        }
    }

    /// `function name(params) body`
    pub fn func_decl(&mut self, name: &str, params: &[NodeIndex], body: NodeIndex) -> NodeIndex {
        let id = self.ident(name);
        let func = self.function(id, params, body);
        self.arena.add(Node::FunctionDeclaration(func))
    }

    /// `function [name](params) body`
    pub fn func_expr(
        &mut self,
        name: Option<&str>,
        params: &[NodeIndex],
        body: NodeIndex,
    ) -> NodeIndex {
        let id = match name {
            Some(name) => self.ident(name),
            None => NodeIndex::NONE,
        };
        let func = self.function(id, params, body);
        self.arena.add(Node::FunctionExpression(func))
    }

    /// `(params) => body`
    pub fn arrow(&mut self, params: &[NodeIndex], body: NodeIndex) -> NodeIndex {
        let func = self.function(NodeIndex::NONE, params, body);
        self.arena.add(Node::ArrowFunctionExpression(func))
    }

    pub fn declarator(&mut self, id: NodeIndex, init: NodeIndex) -> NodeIndex {
        self.arena.add(Node::VariableDeclarator(VariableDeclarator {
            base: NodeBase::default(),
            id,
            init,
        }))
    }

    /// `var name = init;`, returns (declaration, declarator, id)
    pub fn var(&mut self, name: &str, init: NodeIndex) -> (NodeIndex, NodeIndex, NodeIndex) {
        let id = self.ident(name);
        let declarator = self.declarator(id, init);
        let declaration = self.arena.add(Node::VariableDeclaration(VariableDeclaration {
            base: NodeBase::default(),
            kind: DeclarationKind::Var,
            declarations: NodeList::from(vec![declarator]),
        }));
        (declaration, declarator, id)
    }

    pub fn assign(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.arena.add(Node::AssignmentExpression(AssignmentExpression {
            base: NodeBase::default(),
            operator: "=".to_string(),
            left,
            right,
        }))
    }

    pub fn property(&mut self, key: NodeIndex, value: NodeIndex) -> NodeIndex {
        self.arena.add(Node::Property(Property {
            base: NodeBase::default(),
            key,
            value,
            computed: false,
        }))
    }

    pub fn object(&mut self, properties: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::ObjectExpression(ObjectExpression {
            base: NodeBase::default(),
            properties: properties.iter().copied().collect(),
        }))
    }

    pub fn array(&mut self, elements: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::ArrayExpression(ArrayExpression {
            base: NodeBase::default(),
            elements: elements.iter().copied().collect(),
        }))
    }

    pub fn conditional(
        &mut self,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
    ) -> NodeIndex {
        self.arena.add(Node::ConditionalExpression(ConditionalExpression {
            base: NodeBase::default(),
            test,
            consequent,
            alternate,
        }))
    }

    pub fn other(&mut self, type_name: &str, children: &[NodeIndex]) -> NodeIndex {
        self.arena.add(Node::Other(OtherNode {
            base: NodeBase::default(),
            type_name: type_name.to_string(),
            children: children.iter().copied().collect(),
        }))
    }
}
