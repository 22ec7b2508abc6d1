//! Turn a script file into commands, one per non-blank line.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use super::line_reader::LineReader;
use super::tokenizer::{LineIssue, tokenize_line};
use crate::command::{Command, ParseContext};
use crate::error::ParseError;
use crate::identifier::{NameRules, canonical_name};

/// A fully parsed script.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Canonical absolute path of the script.
    pub path: PathBuf,
    pub commands: Vec<Command>,
}

/// Resolve, open and parse the script `name`.
///
/// Errors cite `name` as given, not the resolved path. The file handle is
/// closed before this returns, on success or failure.
pub fn parse_file(name: &str, rules: &NameRules) -> Result<ParsedFile, ParseError> {
    let read_error = |source: io::Error| ParseError::FileRead {
        name: name.to_string(),
        source,
    };

    let path = fs::canonicalize(name).map_err(read_error)?;
    let file = File::open(&path).map_err(read_error)?;
    let commands = parse_reader(name, BufReader::new(file), rules)?;

    Ok(ParsedFile { path, commands })
}

/// Parse script text from any buffered reader. `name` is used in errors.
pub fn parse_reader<R: BufRead>(
    name: &str,
    reader: R,
    rules: &NameRules,
) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    let mut ctx = ParseContext::new(&mut commands);

    for line in LineReader::new(reader) {
        let line = line.map_err(|source| ParseError::FileRead {
            name: name.to_string(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = tokenize_line(line)
            .map_err(|issue| syntax_error(name, issue))?
            .into_iter();
        let Some(first) = tokens.next() else {
            continue;
        };
        if !rules.accepts(&first) {
            return Err(syntax_error(name, LineIssue::InvalidCommandName));
        }

        ctx.begin(canonical_name(&first)).args.extend(tokens);
    }

    Ok(commands)
}

fn syntax_error(name: &str, issue: LineIssue) -> ParseError {
    ParseError::FileSyntax {
        name: name.to_string(),
        issue,
    }
}
