//! Rendering of parse results for stdout and stderr.

use crate::command::{Command, ParseOutput};
use crate::config::OutputFormat;
use crate::error::ParseError;

/// Render a successful run.
pub fn format_output(output: &ParseOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(output),
        OutputFormat::Json => format_json(output),
    }
}

/// The single line written to stderr before exiting.
pub fn format_error(error: &ParseError) -> String {
    error.to_string()
}

fn format_text(output: &ParseOutput) -> String {
    let mut text = String::new();
    for command in &output.commands {
        text.push_str(&format_command(command));
        text.push('\n');
    }
    if output.from_stdin {
        text.push_str("-\n");
    }
    text
}

fn format_command(command: &Command) -> String {
    let mut line = command.name.clone();
    for arg in &command.args {
        line.push(' ');
        line.push_str(&quote(arg));
    }
    line
}

fn quote(arg: &str) -> String {
    serde_json::to_string(arg).unwrap_or_else(|_| format!("\"{}\"", arg))
}

fn format_json(output: &ParseOutput) -> String {
    serde_json::to_string(output).unwrap_or_else(|_| {
        // Fallback keeps stdout parseable
        format!(r#"{{"commands":[],"from_stdin":{}}}"#, output.from_stdin)
    })
}
