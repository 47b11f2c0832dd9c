//! jsnames: recover human-meaningful names from JavaScript syntax trees.
//!
//! Re-exports the AST crate and the resolver so callers depend on one crate:
//!
//! ```no_run
//! use jsnames::{estree, resolve_full_name};
//!
//! let tree = estree::load_str(r#"{"type": "Identifier", "name": "x"}"#)?;
//! assert_eq!(resolve_full_name(&tree.arena, tree.root), "x");
//! # Ok::<(), jsnames::EstreeError>(())
//! ```

pub use jsnames_ast as ast;
pub use jsnames_ast::{
    EstreeError, Node, NodeArena, NodeIndex, NodeKind, SourceTree, estree, limits,
};
pub use jsnames_resolver::*;

pub mod tracing_config;
