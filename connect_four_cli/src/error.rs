/// The error type for parsing a [`Command`](crate::Command) from a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand { command: String },
    MissingColumn,
    InvalidColumn { argument: String },
    UnexpectedArgument { argument: String },
}

impl std::error::Error for CommandParseError {}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::Empty => write!(f, "No command given"),
            CommandParseError::UnknownCommand { command } => write!(
                f,
                "Unknown command '{}', expected one of: move <column>, new, show, quit",
                command
            ),
            CommandParseError::MissingColumn => write!(f, "The move command needs a column"),
            CommandParseError::InvalidColumn { argument } => {
                write!(f, "'{}' is not a column number", argument)
            }
            CommandParseError::UnexpectedArgument { argument } => {
                write!(f, "Unexpected argument '{}'", argument)
            }
        }
    }
}
