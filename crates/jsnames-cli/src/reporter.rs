use colored::Colorize;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Everything reported for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub calls: Vec<CallReport>,
}

/// One `CallExpression` or `NewExpression`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallReport {
    pub kind: &'static str,
    pub start: u32,
    pub end: u32,
    /// Qualified callee name; may be empty or start mid-chain.
    pub full_name: String,
    /// Last callee segment, `.`-prefixed for member calls.
    pub partial_name: Option<String>,
    /// Name of the nearest enclosing function, when it has one.
    pub enclosing_function: Option<String>,
    pub arguments: Vec<ArgumentReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentReport {
    /// `""` when the argument has no name.
    pub name: String,
    pub kind: String,
    /// Whether data flows from the argument into the call.
    pub operand: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub name: String,
    pub count: usize,
}

const UNNAMED: &str = "<unnamed>";

/// Calls per qualified name across all reports, most frequent first, ties by
/// name.
pub fn summarize(reports: &[FileReport]) -> Vec<SummaryEntry> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for call in reports.iter().flat_map(|report| &report.calls) {
        let name = if call.full_name.is_empty() {
            UNNAMED
        } else {
            call.full_name.as_str()
        };
        *counts.entry(name).or_default() += 1;
    }

    let mut entries: Vec<SummaryEntry> = counts
        .into_iter()
        .map(|(name, count)| SummaryEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, reports: &[FileReport]) -> String {
        let mut out = String::new();
        for report in reports {
            out.push_str(&self.format_file(&report.file));
            out.push('\n');
            if report.calls.is_empty() {
                out.push_str("  (no calls)\n");
            }
            for call in &report.calls {
                out.push_str(&self.format_call(call));
            }
        }
        out
    }

    pub fn render_summary(&self, entries: &[SummaryEntry]) -> String {
        let width = entries
            .iter()
            .map(|entry| entry.count.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for entry in entries {
            out.push_str(&format!(
                "{:>width$}  {}\n",
                entry.count,
                self.format_name(&entry.name)
            ));
        }
        out
    }

    fn format_file(&self, file: &str) -> String {
        if self.color {
            file.underline().to_string()
        } else {
            file.to_string()
        }
    }

    fn format_name(&self, name: &str) -> String {
        let name = if name.is_empty() { UNNAMED } else { name };
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn format_call(&self, call: &CallReport) -> String {
        let mut line = format!(
            "  {}..{}  {}",
            call.start,
            call.end,
            self.format_name(&call.full_name)
        );
        if call.kind == "NewExpression" {
            line.push_str(" (new)");
        }
        if let Some(partial) = &call.partial_name {
            line.push_str(&format!(" [{partial}]"));
        }
        if let Some(function) = &call.enclosing_function {
            let function = if self.color {
                function.cyan().to_string()
            } else {
                function.clone()
            };
            line.push_str(&format!(" in {function}"));
        }
        line.push('\n');

        for (index, arg) in call.arguments.iter().enumerate() {
            let name = if arg.name.is_empty() {
                arg.kind.as_str()
            } else {
                arg.name.as_str()
            };
            let flow = match (arg.operand, self.color) {
                (true, true) => "operand".green().to_string(),
                (true, false) => "operand".to_string(),
                (false, true) => "not operand".dimmed().to_string(),
                (false, false) => "not operand".to_string(),
            };
            line.push_str(&format!("      arg {index}: {name} ({flow})\n"));
        }
        line
    }
}
