//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules.

use std::path::PathBuf;

use crate::{
    Config, OutputSettings,
    parse::{RawConfig, RawOutputSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// A key in a config file that has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredKey {
    /// The file the key appears in.
    pub file: PathBuf,
    /// Dotted key name, such as `window` or `output.colour`.
    pub key: String,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config). Each scalar setting
/// takes the first defined value. Unknown keys from every file are collected.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut output = OutputSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(raw) = &parsed.config.output {
            apply_output(&mut output, raw);
        }
    }

    let ignored = configs
        .iter()
        .flat_map(|parsed| {
            parsed
                .config
                .unknown_keys()
                .into_iter()
                .map(|key| IgnoredKey {
                    file: parsed.path.clone(),
                    key,
                })
        })
        .collect();

    Config {
        output,
        ignored,
        config_root: configs
            .first()
            .and_then(|c| c.path.parent().map(PathBuf::from)),
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    }
}

/// Applies raw output settings to result, overwriting any present values.
fn apply_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(color) = raw.color {
        result.color = color;
    }
}
