//! Line command parsing.

use osteo_types::{MilestoneId, TaskId, Weekday, WeekdayError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Day(Weekday),
    Toggle(TaskId),
    Milestone(MilestoneId),
    Milestones,
    Status { json: bool },
    Week,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a day number")]
    DayNotANumber(String),
    #[error(transparent)]
    InvalidDay(#[from] WeekdayError),
    #[error("`{0}` is not a task id")]
    InvalidTaskId(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_owned()));
    }

    let command = match head.to_ascii_lowercase().as_str() {
        "day" => {
            let raw = arg.ok_or(CommandError::MissingArgument {
                command: "day",
                expected: "a day number 1-7",
            })?;
            let number: u8 = raw
                .parse()
                .map_err(|_| CommandError::DayNotANumber(raw.to_owned()))?;
            Command::Day(Weekday::try_new(number)?)
        }
        "toggle" => {
            let raw = arg.ok_or(CommandError::MissingArgument {
                command: "toggle",
                expected: "a task id",
            })?;
            let id: u32 = raw
                .parse()
                .map_err(|_| CommandError::InvalidTaskId(raw.to_owned()))?;
            Command::Toggle(TaskId::new(id))
        }
        "milestone" => {
            let raw = arg.ok_or(CommandError::MissingArgument {
                command: "milestone",
                expected: "a milestone id",
            })?;
            Command::Milestone(MilestoneId::from(raw))
        }
        "status" => match arg {
            None => Command::Status { json: false },
            Some("--json") => Command::Status { json: true },
            Some(other) => return Err(CommandError::UnexpectedArgument(other.to_owned())),
        },
        "milestones" => bare(arg, Command::Milestones)?,
        "week" => bare(arg, Command::Week)?,
        "help" => bare(arg, Command::Help)?,
        "quit" | "exit" => bare(arg, Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

fn bare(arg: Option<&str>, command: Command) -> Result<Command, CommandError> {
    match arg {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_owned())),
        None => Ok(command),
    }
}
