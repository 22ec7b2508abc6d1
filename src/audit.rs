//! Audit logging of parse runs as JSON lines.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::command::ParseOutput;
use crate::error::ParseError;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the run.
    pub timestamp: DateTime<Utc>,
    /// Working directory, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// Process arguments joined with spaces.
    pub args: String,
    /// Number of commands produced (markers included).
    pub commands: usize,
    /// Scripts pulled in, as absolute paths.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Whether more commands were requested from stdin.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub from_stdin: bool,
    /// The fatal error, if the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from the arguments and the run's result.
    pub fn new<S: AsRef<str>>(
        args: &[S],
        cwd: Option<&Path>,
        result: &Result<ParseOutput, ParseError>,
    ) -> Self {
        let joined = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        let (commands, files, from_stdin, error) = match result {
            Ok(output) => (
                output.commands.len(),
                output.files().into_iter().map(String::from).collect(),
                output.from_stdin,
                None,
            ),
            Err(e) => (0, Vec::new(), false, Some(e.to_string())),
        };

        Self {
            timestamp: Utc::now(),
            cwd: cwd.map(|p| p.display().to_string()),
            args: truncate_string(&joined, 200),
            commands,
            files,
            from_stdin,
            error,
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log one parse run.
    pub fn log_run<S: AsRef<str>>(
        &mut self,
        args: &[S],
        cwd: Option<&Path>,
        result: &Result<ParseOutput, ParseError>,
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(args, cwd, result);
        self.log(&entry)
    }
}
