mod cli;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    run_cli(args)
}

// Logs go to stderr so stdout stays pure JSON/CSV.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "flashgen=info",
        1 => "flashgen=debug,flashgen_api=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
