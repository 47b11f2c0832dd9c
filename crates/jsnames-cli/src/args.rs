use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the jsnames binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsnames",
    version,
    about = "Report call-site names from ESTree JSON syntax trees"
)]
pub struct CliArgs {
    /// ESTree JSON files, as produced by e.g. `acorn --ecma2022 src.js`.
    #[arg(required = true, value_name = "AST_JSON")]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the number of calls per qualified name instead of each call.
    #[arg(long)]
    pub summary: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
