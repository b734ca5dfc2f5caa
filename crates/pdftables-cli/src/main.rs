mod cli;
mod extract_cmd;
mod shared;

use std::io::{self, IsTerminal};

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let cli = Cli::parse();

    println!();
    println!("PDF Table Extractor");
    println!("{}", "=".repeat(60));

    let result = extract_cmd::check_capabilities(&pdftables::probe())
        .and_then(|()| shared::resolve_config(&cli))
        .and_then(|config| {
            tracing::debug!(?config, "resolved run configuration");
            extract_cmd::run(&config)
        });

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
