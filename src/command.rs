//! Command types produced by a parse run.

use serde::Serialize;

/// Reserved name of the marker emitted before a script file's commands.
pub const FILE_COMMAND: &str = "<file>";

/// One command: a lowercase name plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Marker carrying the absolute path of an included script.
    pub fn file_marker(path: impl Into<String>) -> Self {
        Self {
            name: FILE_COMMAND.to_string(),
            args: vec![path.into()],
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn is_file_marker(&self) -> bool {
        self.name == FILE_COMMAND
    }
}

/// Result of parsing the process arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    /// Commands in emission order.
    pub commands: Vec<Command>,
    /// Arguments ended on a lone dash: more commands come from stdin.
    pub from_stdin: bool,
}

impl ParseOutput {
    /// True when nothing at all was produced.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.from_stdin
    }

    /// Absolute paths of every included script, in order.
    pub fn files(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.is_file_marker())
            .filter_map(|c| c.args.first().map(String::as_str))
            .collect()
    }
}

/// Emission state for one source (the CLI or a single file).
///
/// Holds at most one open command, identified by its index in the target list.
pub struct ParseContext<'a> {
    commands: &'a mut Vec<Command>,
    current: Option<usize>,
}

impl<'a> ParseContext<'a> {
    pub fn new(commands: &'a mut Vec<Command>) -> Self {
        Self {
            commands,
            current: None,
        }
    }

    /// Start a new command; it becomes the open one.
    pub fn begin(&mut self, name: impl Into<String>) -> &mut Command {
        let index = self.commands.len();
        self.commands.push(Command::new(name));
        self.current = Some(index);
        &mut self.commands[index]
    }

    /// Append to the open command. Returns false if none is open.
    #[must_use]
    pub fn push_arg(&mut self, arg: impl Into<String>) -> bool {
        match self.current.and_then(|i| self.commands.get_mut(i)) {
            Some(command) => {
                command.args.push(arg.into());
                true
            }
            None => false,
        }
    }

    pub fn has_command(&self) -> bool {
        self.current.is_some()
    }

    /// Append finished commands. The open slot is left untouched.
    pub fn splice(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }
}
