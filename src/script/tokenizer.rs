//! Per-line tokenization for script files.
//!
//! Bash-inspired: double quotes keep whitespace and enable backslash escapes,
//! unquoted spaces and tabs separate tokens, and an unquoted `--` drops the
//! rest of the line.

use thiserror::Error;

/// Why a script line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineIssue {
    #[error("Line terminates with incomplete quoted string")]
    UnterminatedQuote,

    #[error("Line terminates with incomplete escape character")]
    UnterminatedEscape,

    #[error("invalid command name")]
    InvalidCommandName,
}

/// Split one logical line (terminator already stripped) into tokens.
///
/// An unquoted dash is held back until the next character decides its fate:
/// another dash truncates the line, whitespace drops it, anything appended
/// gets it prefixed. Backslash only escapes inside quotes.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, LineIssue> {
    let mut tokens = Vec::new();
    let mut current: Option<String> = None;
    let mut in_quotes = false;
    let mut escape_next = false;
    let mut pending_dash = false;

    for c in line.chars() {
        if escape_next {
            append(&mut current, &mut pending_dash, c);
            escape_next = false;
            continue;
        }

        if in_quotes {
            match c {
                '\\' => escape_next = true,
                '"' => in_quotes = false,
                _ => append(&mut current, &mut pending_dash, c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            '-' => {
                if pending_dash {
                    break;
                }
                pending_dash = true;
            }
            ' ' | '\t' => {
                if let Some(token) = current.take() {
                    tokens.push(token);
                }
                pending_dash = false;
            }
            _ => append(&mut current, &mut pending_dash, c),
        }
    }

    if escape_next {
        return Err(LineIssue::UnterminatedEscape);
    }
    if in_quotes {
        return Err(LineIssue::UnterminatedQuote);
    }
    if let Some(token) = current {
        tokens.push(token);
    }
    Ok(tokens)
}

fn append(current: &mut Option<String>, pending_dash: &mut bool, c: char) {
    let token = current.get_or_insert_with(String::new);
    if std::mem::take(pending_dash) {
        token.push('-');
    }
    token.push(c);
}
