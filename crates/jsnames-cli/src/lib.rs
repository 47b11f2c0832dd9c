//! Library side of the `jsnames` binary: argument parsing, per-file analysis
//! and report rendering.

pub mod args;
pub mod driver;
pub mod reporter;
