//! Output formatting for parse runs.

mod response;

pub use response::{format_error, format_output};
