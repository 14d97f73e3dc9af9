//! Command-line interface for snip.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};

use crate::cli::{
    args::{Cli, Commands},
    commands,
    context::CommandContext,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        Commands::Find(cmd) if cmd.no_config => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}

/// Initializes `env_logger`; `RUST_LOG` takes precedence over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
