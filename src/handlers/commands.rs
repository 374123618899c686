use notify_manager_util::NotificationId;
use std::{fmt, str::FromStr};

/// Driver commands, one per input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show <kind> <message...>`
    Show { kind: String, message: String },
    /// `resize <width>`: simulate a viewport resize
    Resize(u32),
    /// `dismiss <id>`: click a popup's dismiss button
    Dismiss(NotificationId),
    /// `list`: print the mounted popups, top first
    List,
    /// `quit`
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(cmd) => write!(f, "unknown command '{}'", cmd),
            CommandError::MissingArgument(arg) => write!(f, "missing argument <{}>", arg),
            CommandError::InvalidNumber(raw) => write!(f, "not a number: {}", raw),
        }
    }
}

impl std::error::Error for CommandError {}

fn parse_number<T: FromStr>(raw: Option<&str>, name: &'static str) -> Result<T, CommandError> {
    let raw = raw.ok_or(CommandError::MissingArgument(name))?;
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "" => Err(CommandError::Empty),
            "show" => {
                let (kind, message) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if kind.is_empty() {
                    return Err(CommandError::MissingArgument("kind"));
                }
                Ok(Command::Show {
                    kind: kind.to_string(),
                    message: message.trim_start().to_string(),
                })
            }
            "resize" => parse_number(rest.split_whitespace().next(), "width").map(Command::Resize),
            "dismiss" => parse_number(rest.split_whitespace().next(), "id")
                .map(|id| Command::Dismiss(NotificationId(id))),
            "list" => Ok(Command::List),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
