//! Script file parsing.

mod file_parser;
mod line_reader;
mod tokenizer;

pub use file_parser::{ParsedFile, parse_file, parse_reader};
pub use line_reader::{LineEnding, LineReader};
pub use tokenizer::{LineIssue, tokenize_line};
