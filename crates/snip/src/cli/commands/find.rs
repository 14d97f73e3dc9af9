//! Implementation of `snip find`.

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use log::info;
use snip::Snippeter;

use crate::cli::{
    args::{ColorChoice, FindCommand},
    context::CommandContext,
    output::{DocumentResult, OutputMode, print_results},
};

/// Name shown for a document read from stdin.
const STDIN_NAME: &str = "-";

/// Prints the snippet of each document for the query.
pub fn run(ctx: &CommandContext, cmd: &FindCommand) -> ExitCode {
    let snippeter = Snippeter::default();

    let documents = match read_documents(&cmd.files) {
        Ok(docs) => docs,
        Err(code) => return code,
    };

    let results: Vec<DocumentResult> = documents
        .into_iter()
        .map(|(source, text)| {
            let outcome = snippeter.snippet(&text, &cmd.query);
            if let Ok(snippet) = &outcome {
                info!(
                    "{source}: excerpt {}..{} of {} bytes",
                    snippet.window.start,
                    snippet.window.end,
                    text.len()
                );
            }
            DocumentResult { source, outcome }
        })
        .collect();

    let color = cmd
        .color
        .unwrap_or_else(|| ColorChoice::from(ctx.config.output.color));
    let mode = if cmd.json {
        OutputMode::Json
    } else if color.enabled() {
        OutputMode::Color
    } else {
        OutputMode::Plain
    };

    print_results(&cmd.query, &results, snippeter.markers(), mode)
}

/// Reads every named file, or stdin when none are given.
fn read_documents(files: &[impl AsRef<Path>]) -> Result<Vec<(String, String)>, ExitCode> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(|e| {
            eprintln!("error: failed to read stdin: {e}");
            ExitCode::FAILURE
        })?;
        return Ok(vec![(STDIN_NAME.to_string(), text)]);
    }

    files
        .iter()
        .map(|path| {
            let path = path.as_ref();
            fs::read_to_string(path)
                .map(|text| (path.display().to_string(), text))
                .map_err(|e| {
                    eprintln!("error: failed to read {}: {e}", path.display());
                    ExitCode::FAILURE
                })
        })
        .collect()
}
