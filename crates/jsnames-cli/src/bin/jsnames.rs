use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use jsnames_cli::args::CliArgs;
use jsnames_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if JSNAMES_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports JSNAMES_LOG_FORMAT=tree|json|text.
    jsnames::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let color = !args.no_color && stdout.is_terminal();

    let mut out = stdout.lock();
    driver::run(&args, color, &mut out)
}
