//! Syntactic name resolution for ESTree nodes.
//!
//! Every function here is a pure query over a [`NodeArena`](jsnames_ast::NodeArena):
//! nothing is mutated or cached, so callers may share one arena between threads.
//! Unresolvable inputs produce sentinels rather than errors:
//!
//! | function | "no answer" |
//! |---|---|
//! | [`resolve_identifier`] | `None` |
//! | [`resolve_node_name`] | `""` |
//! | [`resolve_full_name`] | `""`, or empty segments for non-identifier properties |
//! | [`resolve_partial_name`] | `None` |
//! | [`resolve_enclosing_function_name`] | `None` |
//! | [`is_operand`] | `true` for containing kinds without a rule |
//!
//! This is not scope analysis: bindings, hoisting and shadowing are never
//! consulted, only the shape of the tree around the node.

mod enclosing_function;
mod identifier;
mod operand;
mod qualified_name;

pub use enclosing_function::resolve_enclosing_function_name;
pub use identifier::{resolve_identifier, resolve_node_name};
pub use operand::is_operand;
pub use qualified_name::{resolve_full_name, resolve_partial_name};

#[cfg(test)]
#[path = "../tests/support.rs"]
mod support;

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
