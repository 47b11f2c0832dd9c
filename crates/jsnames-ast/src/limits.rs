//! Centralized limits for input loading.
//!
//! Trees built through [`NodeArena::add`](crate::NodeArena::add) cannot contain
//! parent cycles, so upward walks are bounded by the arena's length and need no
//! limit of their own.

// =============================================================================
// ESTree Loading
// =============================================================================

/// Maximum nesting depth of node objects accepted by the ESTree loader.
///
/// Deeper documents are rejected with
/// [`EstreeError::TooDeep`](crate::estree::EstreeError::TooDeep). The loader
/// grows its stack as it descends, so the limit holds on any thread,
/// including rayon workers.
///
/// ```javascript
/// // Left-nested binary expressions nest one node per operator:
/// '<a>' + x + '</a>' + y /* ... */;
/// ```
pub const MAX_ESTREE_DEPTH: usize = 1024;

/// Maximum `{`/`[` nesting of text passed to
/// [`load_str`](crate::estree::load_str), checked before parsing.
///
/// A node nested in an array sits two JSON levels below its parent. The slack
/// covers `loc` and `range` objects hanging off the deepest node.
/// Deeper text is rejected with
/// [`EstreeError::JsonTooDeep`](crate::estree::EstreeError::JsonTooDeep).
pub const MAX_JSON_DEPTH: usize = 2 * MAX_ESTREE_DEPTH + 8;
