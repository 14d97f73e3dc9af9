//! Implementation of `snip init`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use snip_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use snip_highlight::{Style, TomlHighlighter};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Which `.snip.toml` `snip init` writes.
enum Target {
    /// `.snip.toml` in the working directory.
    Project(PathBuf),
    /// `~/.snip.toml`.
    Global(PathBuf),
}

impl Target {
    /// Picks the target; running in the home directory means the global file.
    fn resolve(ctx: &CommandContext, global: bool) -> Result<Self, String> {
        let home_file = global_config_path();
        let in_home = home_file
            .as_deref()
            .and_then(|p| p.parent())
            .is_some_and(|home| home == ctx.cwd.as_path());

        if global || in_home {
            home_file
                .map(Self::Global)
                .ok_or_else(|| "could not determine home directory".to_string())
        } else {
            Ok(Self::Project(ctx.cwd.join(CONFIG_FILENAME)))
        }
    }

    /// Path that will be written.
    fn path(&self) -> &Path {
        match self {
            Self::Project(path) | Self::Global(path) => path,
        }
    }

    /// Template text for this target.
    fn template(&self) -> Result<String, String> {
        let rendered = match self {
            Self::Project(_) => local_template(),
            Self::Global(_) => global_template(),
        };
        rendered.map_err(|e| e.to_string())
    }
}

/// Writes a commented `.snip.toml` showing the default settings.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    match write_config(ctx, cmd) {
        Ok((path, template)) => {
            println!("Created {}", path.display());
            println!();
            println!("{}", Style::Heading.paint("Configuration written:"));
            print!("{}", TomlHighlighter::new().highlight(&template));
            println!();
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves the target, refuses to clobber without `--force`, and writes the file.
fn write_config(ctx: &CommandContext, cmd: &InitCommand) -> Result<(PathBuf, String), String> {
    let target = Target::resolve(ctx, cmd.global)?;
    let path = target.path();

    if path.exists() && !cmd.force {
        return Err(format!(
            "configuration file already exists: {}\nuse --force to overwrite",
            path.display()
        ));
    }

    let template = target.template()?;
    fs::write(path, &template).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    Ok((path.to_path_buf(), template))
}
