//! Configuration templates for `snip init`.
//!
//! A template is the built-in [`OutputSettings`] rendered as TOML with every
//! setting commented out, under a short header. A fresh file therefore documents
//! the defaults without overriding any of them.

use serde::Serialize;

use crate::{ConfigError, OutputSettings};

/// Header for a project `.snip.toml`.
const LOCAL_HEADER: &str = "\
# snip configuration
#
# Files closer to the working directory win. Uncomment a setting to change it;
# the values shown are the built-in defaults. `root = true` stops the search
# for parent and global configuration.
#
# output.color: \"auto\", \"always\" or \"never\"; `snip find --color` overrides it.
";

/// Header for the global `~/.snip.toml`.
const GLOBAL_HEADER: &str = "\
# snip global configuration (~/.snip.toml)
#
# Lowest-precedence settings, used wherever a project .snip.toml does not set
# them. Uncomment a setting to change it.
#
# output.color: \"auto\", \"always\" or \"never\"; `snip find --color` overrides it.
";

/// The settings rendered below a template header.
#[derive(Serialize)]
struct TemplateBody {
    /// Only written for project templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<bool>,
    /// Output section at its defaults.
    output: OutputSettings,
}

/// Returns the template written by `snip init` in a project directory.
pub fn local_template() -> Result<String, ConfigError> {
    render(LOCAL_HEADER, Some(false))
}

/// Returns the template written by `snip init --global`.
pub fn global_template() -> Result<String, ConfigError> {
    render(GLOBAL_HEADER, None)
}

/// Renders the default settings as commented-out TOML below `header`.
fn render(header: &str, root: Option<bool>) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(&TemplateBody {
        root,
        output: OutputSettings::default(),
    })?;

    let mut template = format!("{header}\n");
    for line in body.lines() {
        if !line.is_empty() {
            template.push_str("# ");
            template.push_str(line);
        }
        template.push('\n');
    }
    Ok(template)
}
