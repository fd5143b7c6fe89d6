/* 📖 # How does the CLI fit together?

The binary is thin glue: it resolves settings (command line over `direxplorer.toml`),
builds a TraversalPolicy, and runs the engine over the real file system with a
DisplayHandler printing to stdout. Logs go to stderr, quiet unless `--verbose`
or RUST_LOG asks for more.

Exit codes:
- 0: Success (the search ran to completion or stopped at the item limit)
- 1: Error (bad configuration, unreadable directory, invalid pattern)
*/

mod args;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{debug, info};

use direxplorer_base::tracing::init_tracing;
use direxplorer_base::{ExplorerError, ExplorerResult, GatewayHandle, RealGateway};
use direxplorer_engine::{DisplayHandler, TraversalEngine};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing(if args.verbose { "debug" } else { "warn" }) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        report_error(&e, &mut io::stderr());
        process::exit(1);
    }
}

/// Print the failure once for the user; the full error tree only goes to the debug log.
fn report_error(e: &ExplorerError, out: &mut impl Write) {
    debug!("search failed: {:?}", e);
    let _ = writeln!(out, "\nError: {}", e);
}

fn run(args: &Args) -> ExplorerResult<()> {
    let config = args.resolve_config()?;
    info!(
        path = %config.path,
        patterns = ?config.patterns,
        recurse = config.recurse,
        hide_empty = config.hide_empty_directories,
        show_all = config.show_all_in_current_directory,
        max_items = config.max_items,
        "effective settings"
    );

    let mut policy = config.to_policy();
    let engine = TraversalEngine::new(GatewayHandle::new(RealGateway::new()));

    let stdout = io::stdout();
    let mut display = DisplayHandler::new(stdout.lock());
    engine.search(&mut policy, &mut display, Path::new(&config.path))?;

    let mut out = display.into_inner();
    writeln!(out).map_err(output_error)?;
    for line in engine.show_summary(&policy).to_string().lines() {
        writeln!(out, "  {}", line).map_err(output_error)?;
    }
    out.flush().map_err(output_error)?;
    Ok(())
}

fn output_error(e: io::Error) -> Box<ExplorerError> {
    Box::new(ExplorerError::file_error("<stdout>", e))
}
