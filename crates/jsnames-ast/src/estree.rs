//! ESTree JSON loader.
//!
//! Converts the JSON AST produced by acorn, espree and similar parsers into a
//! [`NodeArena`]. Children are loaded before their parent, so the arena links
//! parents as it goes.
//!
//! Node types without a dedicated [`Node`] variant become [`Node::Other`]; their
//! children are every nested object that carries a string `type`, in field
//! order.

use crate::arena::NodeArena;
use crate::base::{NodeBase, NodeIndex, NodeList};
use crate::limits::{MAX_ESTREE_DEPTH, MAX_JSON_DEPTH};
use crate::node::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// A loaded tree: the arena and the handle of its root (usually a `Program`).
#[derive(Debug)]
pub struct SourceTree {
    pub arena: NodeArena,
    pub root: NodeIndex,
}

#[derive(Debug, Error)]
pub enum EstreeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a node object at `{path}`")]
    NotANode { path: String },

    #[error("node at `{path}` has no string `type` field")]
    MissingType { path: String },

    #[error("{node_type} at `{path}` is missing required field `{field}`")]
    MissingField {
        node_type: &'static str,
        field: &'static str,
        path: String,
    },

    #[error("{node_type} at `{path}` has an invalid `{field}` field: expected {expected}")]
    InvalidField {
        node_type: &'static str,
        field: &'static str,
        expected: &'static str,
        path: String,
    },

    #[error("Identifier at `{path}` has an empty name")]
    EmptyIdentifier { path: String },

    #[error("node nesting exceeds {limit} levels at `{path}`")]
    TooDeep { limit: usize, path: String },

    #[error("JSON nesting exceeds {limit} levels")]
    JsonTooDeep { limit: usize },
}

/// Remaining stack below which the loader switches to a fresh segment.
const LOADER_RED_ZONE: usize = 128 * 1024;
/// Size of each fresh stack segment the loader allocates.
const LOADER_STACK_GROWTH: usize = 1024 * 1024;
/// Stack for parsing and dropping a [`MAX_JSON_DEPTH`]-deep [`Value`].
const JSON_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Parse ESTree JSON text and load it.
///
/// Nesting is bounded by [`MAX_JSON_DEPTH`] and [`MAX_ESTREE_DEPTH`] only, not
/// by the caller's stack size or `serde_json`'s default recursion limit.
pub fn load_str(json: &str) -> Result<SourceTree, EstreeError> {
    if json_depth_exceeds(json, MAX_JSON_DEPTH) {
        return Err(EstreeError::JsonTooDeep {
            limit: MAX_JSON_DEPTH,
        });
    }

    // serde_json recurses once per JSON level, both parsing and dropping.
    stacker::grow(JSON_STACK_SIZE, || -> Result<SourceTree, EstreeError> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        load_value(&value)
    })
}

/// Load an already-parsed ESTree JSON value.
pub fn load_value(value: &Value) -> Result<SourceTree, EstreeError> {
    let mut loader = Loader::default();
    let root = loader.node(value)?;
    let arena = loader.arena;
    debug!(nodes = arena.len(), ?root, "loaded ESTree document");
    Ok(SourceTree { arena, root })
}

#[derive(Debug)]
enum PathSegment {
    Field(String),
    Index(usize),
}

#[derive(Default)]
struct Loader {
    arena: NodeArena,
    path: Vec<PathSegment>,
    depth: usize,
}

/// Renders the current location as `body[0].expression.callee`.
struct PathDisplay<'a>(&'a [PathSegment]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl Loader {
    fn path(&self) -> String {
        PathDisplay(&self.path).to_string()
    }

    fn node(&mut self, value: &Value) -> Result<NodeIndex, EstreeError> {
        if self.depth >= MAX_ESTREE_DEPTH {
            return Err(EstreeError::TooDeep {
                limit: MAX_ESTREE_DEPTH,
                path: self.path(),
            });
        }
        self.depth += 1;
        let result = stacker::maybe_grow(LOADER_RED_ZONE, LOADER_STACK_GROWTH, || {
            self.load_node(value)
        });
        self.depth -= 1;
        result
    }

    fn load_node(&mut self, value: &Value) -> Result<NodeIndex, EstreeError> {
        let Some(obj) = value.as_object() else {
            return Err(EstreeError::NotANode { path: self.path() });
        };
        let Some(node_type) = obj.get("type").and_then(Value::as_str) else {
            return Err(EstreeError::MissingType { path: self.path() });
        };
        let base = span(obj);

        let node = match node_type {
            "Program" => Node::Program(StatementList {
                base,
                body: self.required_list(obj, "Program", "body", false)?,
            }),
            "BlockStatement" => Node::BlockStatement(StatementList {
                base,
                body: self.required_list(obj, "BlockStatement", "body", false)?,
            }),
            "ExpressionStatement" => Node::ExpressionStatement(Wrapper {
                base,
                expression: self.required(obj, "ExpressionStatement", "expression")?,
            }),
            "ReturnStatement" => Node::ReturnStatement(Wrapper {
                base,
                expression: self.optional(obj, "argument")?,
            }),
            "VariableDeclaration" => {
                let kind = match obj.get("kind") {
                    None => DeclarationKind::Var,
                    Some(kind) => kind
                        .as_str()
                        .and_then(DeclarationKind::parse)
                        .ok_or_else(|| EstreeError::InvalidField {
                            node_type: "VariableDeclaration",
                            field: "kind",
                            expected: "one of var, let, const, using, await using",
                            path: self.path(),
                        })?,
                };
                Node::VariableDeclaration(VariableDeclaration {
                    base,
                    kind,
                    declarations: self.required_list(
                        obj,
                        "VariableDeclaration",
                        "declarations",
                        false,
                    )?,
                })
            }
            "VariableDeclarator" => Node::VariableDeclarator(VariableDeclarator {
                base,
                id: self.required(obj, "VariableDeclarator", "id")?,
                init: self.optional(obj, "init")?,
            }),
            "Identifier" => {
                let name = self.string(obj, "Identifier", "name")?;
                if name.is_empty() {
                    return Err(EstreeError::EmptyIdentifier { path: self.path() });
                }
                Node::Identifier(Identifier {
                    base,
                    name: name.to_string(),
                })
            }
            "ThisExpression" => Node::ThisExpression(Token { base }),
            "Literal" => {
                let raw = match obj.get("raw").and_then(Value::as_str) {
                    Some(raw) => raw.to_string(),
                    None => obj.get("value").map(Value::to_string).unwrap_or_default(),
                };
                Node::Literal(Literal { base, raw })
            }
            "MemberExpression" => Node::MemberExpression(MemberExpression {
                base,
                object: self.required(obj, "MemberExpression", "object")?,
                property: self.required(obj, "MemberExpression", "property")?,
                computed: self.flag(obj, "MemberExpression", "computed")?,
            }),
            "CallExpression" => Node::CallExpression(self.call(obj, "CallExpression", base)?),
            "NewExpression" => Node::NewExpression(self.call(obj, "NewExpression", base)?),
            "FunctionExpression" => {
                Node::FunctionExpression(self.function(obj, "FunctionExpression", base)?)
            }
            "FunctionDeclaration" => {
                Node::FunctionDeclaration(self.function(obj, "FunctionDeclaration", base)?)
            }
            "ArrowFunctionExpression" => Node::ArrowFunctionExpression(self.function(
                obj,
                "ArrowFunctionExpression",
                base,
            )?),
            "AssignmentExpression" => {
                let operator = match obj.get("operator") {
                    None => "=".to_string(),
                    Some(_) => self.string(obj, "AssignmentExpression", "operator")?.to_string(),
                };
                Node::AssignmentExpression(AssignmentExpression {
                    base,
                    operator,
                    left: self.required(obj, "AssignmentExpression", "left")?,
                    right: self.required(obj, "AssignmentExpression", "right")?,
                })
            }
            "Property" => Node::Property(Property {
                base,
                key: self.required(obj, "Property", "key")?,
                value: self.required(obj, "Property", "value")?,
                computed: self.flag(obj, "Property", "computed")?,
            }),
            "ObjectExpression" => Node::ObjectExpression(ObjectExpression {
                base,
                properties: self.required_list(obj, "ObjectExpression", "properties", false)?,
            }),
            "ArrayExpression" => Node::ArrayExpression(ArrayExpression {
                base,
                elements: self.required_list(obj, "ArrayExpression", "elements", true)?,
            }),
            "ConditionalExpression" => Node::ConditionalExpression(ConditionalExpression {
                base,
                test: self.required(obj, "ConditionalExpression", "test")?,
                consequent: self.required(obj, "ConditionalExpression", "consequent")?,
                alternate: self.required(obj, "ConditionalExpression", "alternate")?,
            }),
            other => {
                trace!(node_type = other, path = %self.path(), "keeping unmodelled node as Other");
                Node::Other(OtherNode {
                    base,
                    type_name: other.to_string(),
                    children: self.generic_children(obj)?,
                })
            }
        };

        Ok(self.arena.add(node))
    }

    fn call(
        &mut self,
        obj: &Map<String, Value>,
        node_type: &'static str,
        base: NodeBase,
    ) -> Result<CallExpression, EstreeError> {
        Ok(CallExpression {
            base,
            callee: self.required(obj, node_type, "callee")?,
            // `new Foo` without parentheses has an empty argument list
            arguments: match obj.get("arguments") {
                None => NodeList::new(),
                Some(_) => self.required_list(obj, node_type, "arguments", false)?,
            },
        })
    }

    fn function(
        &mut self,
        obj: &Map<String, Value>,
        node_type: &'static str,
        base: NodeBase,
    ) -> Result<Function, EstreeError> {
        Ok(Function {
            base,
            id: self.optional(obj, "id")?,
            params: self.required_list(obj, node_type, "params", false)?,
            body: self.required(obj, node_type, "body")?,
        })
    }

    /// Load a child node that must be present and non-null.
    fn required(
        &mut self,
        obj: &Map<String, Value>,
        node_type: &'static str,
        field: &'static str,
    ) -> Result<NodeIndex, EstreeError> {
        match obj.get(field) {
            None | Some(Value::Null) => Err(EstreeError::MissingField {
                node_type,
                field,
                path: self.path(),
            }),
            Some(value) => self.within(PathSegment::Field(field.to_string()), |l| l.node(value)),
        }
    }

    /// Load a child node that may be missing or `null`.
    fn optional(
        &mut self,
        obj: &Map<String, Value>,
        field: &'static str,
    ) -> Result<NodeIndex, EstreeError> {
        match obj.get(field) {
            None | Some(Value::Null) => Ok(NodeIndex::NONE),
            Some(value) => self.within(PathSegment::Field(field.to_string()), |l| l.node(value)),
        }
    }

    /// Load an array of child nodes. With `allow_holes`, `null` entries become
    /// [`NodeIndex::NONE`].
    fn required_list(
        &mut self,
        obj: &Map<String, Value>,
        node_type: &'static str,
        field: &'static str,
        allow_holes: bool,
    ) -> Result<NodeList, EstreeError> {
        let items = match obj.get(field) {
            None => {
                return Err(EstreeError::MissingField {
                    node_type,
                    field,
                    path: self.path(),
                });
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(EstreeError::InvalidField {
                    node_type,
                    field,
                    expected: "an array",
                    path: self.path(),
                });
            }
        };

        self.within(PathSegment::Field(field.to_string()), |l| {
            let mut list = NodeList::new();
            for (i, item) in items.iter().enumerate() {
                if item.is_null() {
                    if !allow_holes {
                        return Err(EstreeError::NotANode {
                            path: format!("{}[{i}]", l.path()),
                        });
                    }
                    list.nodes.push(NodeIndex::NONE);
                    continue;
                }
                let idx = l.within(PathSegment::Index(i), |l| l.node(item))?;
                list.nodes.push(idx);
            }
            Ok(list)
        })
    }

    fn flag(
        &self,
        obj: &Map<String, Value>,
        node_type: &'static str,
        field: &'static str,
    ) -> Result<bool, EstreeError> {
        match obj.get(field) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(EstreeError::InvalidField {
                node_type,
                field,
                expected: "a boolean",
                path: self.path(),
            }),
        }
    }

    fn string<'v>(
        &self,
        obj: &'v Map<String, Value>,
        node_type: &'static str,
        field: &'static str,
    ) -> Result<&'v str, EstreeError> {
        match obj.get(field) {
            None => Err(EstreeError::MissingField {
                node_type,
                field,
                path: self.path(),
            }),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(EstreeError::InvalidField {
                node_type,
                field,
                expected: "a string",
                path: self.path(),
            }),
        }
    }

    /// Children of an unmodelled node: nested node objects in field order,
    /// looking one level into arrays.
    fn generic_children(&mut self, obj: &Map<String, Value>) -> Result<NodeList, EstreeError> {
        let mut list = NodeList::new();
        for (key, value) in obj {
            match value {
                Value::Object(_) if is_node(value) => {
                    let idx = self.within(PathSegment::Field(key.clone()), |l| l.node(value))?;
                    list.nodes.push(idx);
                }
                Value::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if !is_node(item) {
                            continue;
                        }
                        let idx = self.within(PathSegment::Field(key.clone()), |l| {
                            l.within(PathSegment::Index(i), |l| l.node(item))
                        })?;
                        list.nodes.push(idx);
                    }
                }
                _ => {}
            }
        }
        Ok(list)
    }

    fn within<T>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Loader) -> Result<T, EstreeError>,
    ) -> Result<T, EstreeError> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }
}

/// Whether `{`/`[` nesting in `json` goes deeper than `limit`. Brackets inside
/// string literals are skipped; malformed text is left for the parser to reject.
fn json_depth_exceeds(json: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

fn is_node(value: &Value) -> bool {
    value.get("type").is_some_and(Value::is_string)
}

/// Source offsets from acorn-style `start`/`end` or espree-style `range`.
fn span(obj: &Map<String, Value>) -> NodeBase {
    let offset = |v: Option<&Value>| {
        v.and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    if let (Some(pos), Some(end)) = (offset(obj.get("start")), offset(obj.get("end"))) {
        return NodeBase::new(pos, end);
    }
    if let Some(Value::Array(range)) = obj.get("range")
        && let [start, end] = range.as_slice()
        && let (Some(pos), Some(end)) = (offset(Some(start)), offset(Some(end)))
    {
        return NodeBase::new(pos, end);
    }
    NodeBase::default()
}

#[cfg(test)]
#[path = "../tests/estree_tests.rs"]
mod estree_tests;
