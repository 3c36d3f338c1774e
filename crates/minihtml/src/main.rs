//! minihtml CLI - convert an article into a single static HTML page.
//!
//! ```text
//! minihtml --input api.article --output index.html
//! ```
//!
//! Settings not given on the command line come from `minihtml.toml`
//! (discovered in the current directory or its parents) or built-in defaults.

mod convert;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use convert::ConvertArgs;
use output::Output;

/// minihtml - article to static HTML converter.
#[derive(Parser)]
#[command(name = "minihtml", version, about)]
struct Cli {
    /// Enable info-level logging (otherwise RUST_LOG is used).
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.convert.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
