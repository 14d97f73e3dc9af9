//! Implementation of `snip config`.

use std::process::ExitCode;

use snip_highlight::{Style, TomlHighlighter};

use crate::cli::context::CommandContext;

/// Shows configuration files and effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    println!("{}", Style::Heading.paint("Config files (highest precedence first):"));
    if config.sources.is_empty() {
        println!("  {}", Style::Sentinel.paint("(none, using built-in defaults)"));
    } else {
        for path in &config.sources {
            println!("  {}", path.display());
        }
    }
    println!();

    let toml = match config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", Style::Heading.paint("Effective settings:"));
    print!("{}", TomlHighlighter::new().highlight(&toml));
    println!();

    ExitCode::SUCCESS
}
