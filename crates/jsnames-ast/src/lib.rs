//! AST types for the jsnames analysis crates.
//!
//! This crate provides:
//! - Arena storage with stable [`NodeIndex`] handles and parent links (`NodeArena`)
//! - The tagged [`Node`] union over ESTree node kinds
//! - An ESTree JSON loader for parser output (`estree`)
//! - Walk and loading limits (`limits`)

pub mod base;
pub use base::{NodeBase, NodeIndex, NodeList};

pub mod node;
pub use node::{Node, NodeKind};

pub mod arena;
pub use arena::{Ancestors, NodeArena};

pub mod estree;
pub use estree::{EstreeError, SourceTree};

pub mod limits;
