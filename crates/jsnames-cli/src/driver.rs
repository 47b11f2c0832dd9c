use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::args::{CliArgs, OutputFormat};
use crate::reporter::{ArgumentReport, CallReport, FileReport, Reporter, summarize};
use jsnames::{
    Node, SourceTree, estree, is_operand, resolve_enclosing_function_name, resolve_full_name,
    resolve_node_name, resolve_partial_name,
};

/// Report every call and `new` expression of a loaded tree, in document order.
pub fn analyze_tree(file: &str, tree: &SourceTree) -> FileReport {
    let arena = &tree.arena;
    let mut calls = Vec::new();

    for idx in arena.preorder(tree.root) {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        // Name resolution unwraps `CallExpression` itself; for `new` the callee
        // is named directly.
        let (call, named) = match node {
            Node::CallExpression(call) => (call, idx),
            Node::NewExpression(call) => (call, call.callee),
            _ => continue,
        };

        let enclosing_function = resolve_enclosing_function_name(arena, idx)
            .map(|name| resolve_full_name(arena, name))
            .filter(|name| !name.is_empty());

        let arguments = call
            .arguments
            .iter()
            .filter(|arg| arg.is_some())
            .map(|arg| ArgumentReport {
                name: resolve_node_name(arena, arg).to_string(),
                kind: arena.kind_name(arg).unwrap_or_default().to_string(),
                operand: is_operand(arena, arg, idx),
            })
            .collect();

        calls.push(CallReport {
            kind: node.kind().as_str(),
            start: node.pos(),
            end: node.end(),
            full_name: resolve_full_name(arena, named),
            partial_name: resolve_partial_name(arena, named),
            enclosing_function,
            arguments,
        });
    }

    debug!(file, calls = calls.len(), "analyzed tree");
    FileReport {
        file: file.to_string(),
        calls,
    }
}

/// Read, load and analyze one ESTree JSON file.
pub fn analyze_file(path: &Path) -> Result<FileReport> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tree = estree::load_str(&json)
        .with_context(|| format!("failed to load ESTree JSON from {}", path.display()))?;
    Ok(analyze_tree(&path.display().to_string(), &tree))
}

/// Analyze all input files (in parallel) and write the report.
pub fn run(args: &CliArgs, color: bool, out: &mut dyn Write) -> Result<()> {
    let reports: Vec<FileReport> = args
        .files
        .par_iter()
        .map(|path| analyze_file(path))
        .collect::<Result<_>>()?;

    let reporter = Reporter::new(color);
    match (args.format, args.summary) {
        (OutputFormat::Text, false) => out.write_all(reporter.render(&reports).as_bytes())?,
        (OutputFormat::Text, true) => {
            out.write_all(reporter.render_summary(&summarize(&reports)).as_bytes())?
        }
        (OutputFormat::Json, false) => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
        (OutputFormat::Json, true) => {
            serde_json::to_writer_pretty(&mut *out, &summarize(&reports))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
