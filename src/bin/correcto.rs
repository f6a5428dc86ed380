//! Correcto CLI binary.

use std::process;

use clap::Parser;
use correcto::cli::{args::*, commands::*};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CorrectoArgs::parse();

    // RUST_LOG wins over the verbosity flags when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
