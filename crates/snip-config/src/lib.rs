//! Configuration system for snip.
//!
//! snip reads optional TOML configuration files named `.snip.toml`. Configuration is
//! resolved by walking up the directory tree from the current working directory,
//! collecting any `.snip.toml` files found, then loading `~/.snip.toml` as the
//! global config with lowest precedence.
//!
//! The snippet policy itself (context words, edge snapping, marker text) is
//! fixed and cannot be configured. Configuration only covers how the `snip`
//! command presents results. Keys that try to change the fixed policy, or that
//! snip does not know, are kept so `snip check` can report them.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{IgnoredKey, ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawOutputSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for snip.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output settings for the `snip` command.
    pub output: OutputSettings,
    /// Keys found in config files that snip ignores, in source order.
    pub ignored: Vec<IgnoredKey>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Files that contributed to this configuration, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.snip.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            output: &self.output,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// When `snip find` renders highlights with terminal colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Presentation settings for the `snip` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Color mode used when `--color` is not given.
    pub color: ColorMode,
}

/// Borrowed view of the settings sections for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Output section.
    output: &'a OutputSettings,
}
