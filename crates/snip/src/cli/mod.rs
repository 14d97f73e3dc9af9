//! CLI support for the `snip` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
