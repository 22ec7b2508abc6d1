//! Fabline - command stream parsing.
//!
//! Turns process arguments and the script files they name into one ordered
//! list of commands (a lowercase name plus string arguments) for an external
//! engine to interpret.

pub mod audit;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod identifier;
pub mod output;
pub mod script;

pub use cli::parse_arguments;
pub use command::{Command, FILE_COMMAND, ParseContext, ParseOutput};
pub use config::{Config, OutputFormat};
pub use error::ParseError;
pub use identifier::{NameRules, is_valid_identifier};
pub use output::{format_error, format_output};
