use std::str::FromStr;

use crate::error::CommandParseError;

/// One line of input in an interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Drop a marker into this column.
    Move(i32),
    /// Throw away the current game and start a new one.
    New,
    /// Present the current state again.
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let first = words.next().ok_or(CommandParseError::Empty)?;

        let command = match first.to_ascii_lowercase().as_str() {
            "move" | "m" => {
                let argument = words.next().ok_or(CommandParseError::MissingColumn)?;
                Command::Move(parse_column(argument)?)
            }
            "new" | "reset" => Command::New,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            // A bare number is a move
            _ if first.starts_with(|c: char| c == '-' || c.is_ascii_digit()) => {
                Command::Move(parse_column(first)?)
            }
            _ => {
                return Err(CommandParseError::UnknownCommand {
                    command: String::from(first),
                })
            }
        };

        if let Some(argument) = words.next() {
            return Err(CommandParseError::UnexpectedArgument {
                argument: String::from(argument),
            });
        }
        Ok(command)
    }
}

fn parse_column(argument: &str) -> Result<i32, CommandParseError> {
    argument
        .parse()
        .map_err(|_| CommandParseError::InvalidColumn {
            argument: String::from(argument),
        })
}
