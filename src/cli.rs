//! Process argument parsing.
//!
//! `-` announces a command name, `-name` is the collapsed form of `- name`,
//! other tokens are arguments of the open command or, when none is open,
//! script files whose commands are spliced in place. A trailing lone `-`
//! asks for more commands on stdin.

use std::iter;

use crate::command::{Command, ParseContext, ParseOutput};
use crate::error::ParseError;
use crate::identifier::{NameRules, canonical_name};
use crate::script::parse_file;

/// Parse the process arguments (program name already removed).
pub fn parse_arguments<I, S>(args: I, rules: &NameRules) -> Result<ParseOutput, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = ParseOutput::default();
    let mut have_dash = false;
    let mut ctx = ParseContext::new(&mut output.commands);

    for arg in args {
        let arg = arg.as_ref();
        let token = if arg == "-" {
            if have_dash {
                return Err(ParseError::DashSuccession);
            }
            have_dash = true;
            continue;
        } else if let Some(rest) = arg.strip_prefix('-') {
            if have_dash || rest.starts_with('-') {
                return Err(ParseError::DashSuccession);
            }
            have_dash = true;
            rest
        } else {
            arg
        };

        if have_dash {
            if !rules.accepts(token) {
                return Err(ParseError::InvalidCliCommandName);
            }
            have_dash = false;
            ctx.begin(canonical_name(token));
        } else if !ctx.push_arg(token) {
            let parsed = parse_file(token, rules)?;
            let marker = Command::file_marker(parsed.path.to_string_lossy());
            ctx.splice(iter::once(marker).chain(parsed.commands));
        }
    }

    output.from_stdin = have_dash;
    Ok(output)
}
