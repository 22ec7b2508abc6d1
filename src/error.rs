//! Errors that abort a parse run.

use thiserror::Error;

use crate::script::LineIssue;

/// A fatal parse failure. The first one stops the run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid CLI syntax: succession of dashes")]
    DashSuccession,

    #[error("Invalid CLI syntax: invalid command name")]
    InvalidCliCommandName,

    #[error("Error reading specified file: {name}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid syntax in file {name}: {issue}")]
    FileSyntax { name: String, issue: LineIssue },
}

impl ParseError {
    /// File named by the error, if it came from a script.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ParseError::FileRead { name, .. } | ParseError::FileSyntax { name, .. } => Some(name),
            ParseError::DashSuccession | ParseError::InvalidCliCommandName => None,
        }
    }
}
