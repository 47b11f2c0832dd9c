//! Tracing configuration for debugging name resolution.
//!
//! Supports three output formats controlled by `JSNAMES_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why did a call resolve to an empty name?
//! JSNAMES_LOG=trace jsnames ast.json
//!
//! # Loader warnings only, as a tree
//! JSNAMES_LOG="jsnames_ast=debug" JSNAMES_LOG_FORMAT=tree jsnames ast.json
//! ```
//!
//! The subscriber is only initialised when `JSNAMES_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.
//!
//! ## What is traced
//!
//! Resolvers never fail; they fall back to a sentinel instead. Each fallback
//! emits one event, so `trace` output explains an empty or missing name.
//!
//! | target | level | event |
//! |---|---|---|
//! | `jsnames_ast::estree` | `debug` | document loaded, with its node count |
//! | `jsnames_ast::estree` | `trace` | unmodelled node type kept as `Other`, with its field path |
//! | `jsnames_ast::arena` | `debug` | ancestor walk cut short by a corrupt parent link |
//! | `jsnames_resolver::identifier` | `trace` | node does not resolve to an identifier |
//! | `jsnames_resolver::qualified_name` | `trace` | non-identifier property read as an empty segment |
//! | `jsnames_resolver::enclosing_function` | `trace` | anonymous function with no assignment target |
//! | `jsnames_cli::driver` | `debug` | file analyzed, with its call count |
//!
//! ```bash
//! # Why is a segment of `a..b` empty?
//! JSNAMES_LOG="jsnames_resolver::qualified_name=trace" jsnames ast.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `JSNAMES_LOG_FORMAT` value; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("JSNAMES_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `JSNAMES_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("JSNAMES_LOG") {
        Ok(directives) => parse_filter(&directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Parse `JSNAMES_LOG` directives, e.g. `jsnames_ast=debug,jsnames_resolver=trace`.
/// Invalid directives are skipped.
fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder().parse_lossy(directives)
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `JSNAMES_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with reports on stdout. Calling this more
/// than once keeps the first subscriber.
pub fn init_tracing() {
    let has_own_log = std::env::var("JSNAMES_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // A subscriber installed earlier (tests, embedding) stays in place.
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            let _ = Registry::default().with(filter).with(tree_layer).try_init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            let _ = Registry::default().with(filter).with(json_layer).try_init();
        }
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("verbose"), LogFormat::Text);
    }

    #[test]
    fn filter_directives_per_crate() {
        use tracing_subscriber::filter::LevelFilter;

        let filter = parse_filter("jsnames_resolver::qualified_name=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = parse_filter("jsnames_ast=debug,jsnames_cli=info");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        // A bad directive does not discard the good ones.
        let filter = parse_filter("jsnames_ast=loud,jsnames_cli=warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
