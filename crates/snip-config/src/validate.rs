//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::PathBuf};

use crate::{Config, IgnoredKey};

/// Top-level sections that name parts of the fixed snippet policy.
const FIXED_SECTIONS: &[&str] = &["window", "markers"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key tries to change the snippet policy, which is fixed.
    FixedSetting {
        /// File containing the key.
        file: PathBuf,
        /// Dotted key name.
        key: String,
    },
    /// A key snip does not recognize.
    UnknownKey {
        /// File containing the key.
        file: PathBuf,
        /// Dotted key name.
        key: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedSetting { file, key } => write!(
                f,
                "{}: `{key}` is ignored; the snippet policy is fixed",
                file.display()
            ),
            Self::UnknownKey { file, key } => {
                write!(f, "{}: unknown setting `{key}` is ignored", file.display())
            }
        }
    }
}

impl From<&IgnoredKey> for ConfigWarning {
    fn from(ignored: &IgnoredKey) -> Self {
        let section = ignored.key.split('.').next().unwrap_or_default();
        let file = ignored.file.clone();
        let key = ignored.key.clone();
        if FIXED_SECTIONS.contains(&section) {
            Self::FixedSetting { file, key }
        } else {
            Self::UnknownKey { file, key }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    config.ignored.iter().map(ConfigWarning::from).collect()
}
