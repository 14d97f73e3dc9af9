//! Clap argument definitions for the `snip` CLI.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use snip_config::ColorMode;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "snip")]
#[command(about = "Extract the shortest passage containing every query term")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `snip` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the highlighted snippet of each document for a query
    #[command(after_help = "\
Every word in QUERY must occur in a document for a snippet to be formed. Words
match case-insensitively, as whole words, with an optional plural 's' or 'es'.

EXAMPLES:
  snip find 'tasty apple' review.txt
  cat review.txt | snip find 'tasty apple'
  snip find --json 'dr schlaenker' a.txt b.txt")]
    Find(FindCommand),

    /// Initialize snip configuration in current directory
    Init(InitCommand),

    /// Show configuration files and effective settings
    Config,

    /// Report configuration keys snip ignores
    #[command(after_help = "\
The snippet policy is fixed, so [window] and [markers] sections are reported
along with misspelled keys.

Exits with status 1 when there is any warning, so scripts can gate on it.")]
    Check,
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color; markers are printed literally.
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::Auto,
            ColorMode::Always => Self::Always,
            ColorMode::Never => Self::Never,
        }
    }
}

impl ColorChoice {
    /// Resolves the choice against the current stdout.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Arguments for `snip find`.
#[derive(Args, Debug, Clone)]
pub struct FindCommand {
    /// Search query; punctuation is ignored
    pub query: String,

    /// Documents to search (reads stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Render highlights with terminal colors [default: output.color, else auto]
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Ignore .snip.toml files
    #[arg(long)]
    pub no_config: bool,
}

/// Arguments for `snip init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.snip.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}
