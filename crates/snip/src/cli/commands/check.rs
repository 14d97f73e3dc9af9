//! Implementation of `snip check`.

use std::process::ExitCode;

use snip_highlight::Style;

use crate::cli::context::CommandContext;

/// Validates the loaded configuration and prints any warnings.
///
/// Exits with failure when there are warnings, so scripts can gate on it.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    println!("Checking configuration...");
    for path in &config.sources {
        println!("  {}", path.display());
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("{}", Style::Ok.paint("Configuration OK"));
        return ExitCode::SUCCESS;
    }

    for w in &warnings {
        println!("{} {w}", Style::Warning.paint("warning:"));
    }
    ExitCode::FAILURE
}
