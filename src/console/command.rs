//! Command definitions
//!
//! Represents commands typed at the console.

use std::fmt;

use crate::error::{LineKvError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Write,
    Read,
    Delete,
}

impl CommandType {
    /// Keyword as typed at the console
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Write => "write",
            CommandType::Read => "read",
            CommandType::Delete => "delete",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "write" => Some(CommandType::Write),
            "read" => Some(CommandType::Read),
            "delete" => Some(CommandType::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a key-value record
    Write { key: String, value: String },

    /// Read the latest value of a key
    Read { key: String },

    /// Remove every record of a key
    Delete { key: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Write { .. } => CommandType::Write,
            Command::Read { .. } => CommandType::Read,
            Command::Delete { .. } => CommandType::Delete,
        }
    }

    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command_type = CommandType::from_keyword(name).ok_or_else(|| {
            LineKvError::Command(format!(
                "unknown command '{name}', supported: write, read, delete"
            ))
        })?;

        let command = match (command_type, args) {
            (CommandType::Write, [key, value]) => Command::Write {
                key: key.to_string(),
                value: value.to_string(),
            },
            (CommandType::Read, [key]) => Command::Read {
                key: key.to_string(),
            },
            (CommandType::Delete, [key]) => Command::Delete {
                key: key.to_string(),
            },
            (CommandType::Write, _) => {
                return Err(LineKvError::Command(format!(
                    "write takes 2 arguments (key, value), got {}",
                    args.len()
                )))
            }
            (other, _) => {
                return Err(LineKvError::Command(format!(
                    "{other} takes 1 argument (key), got {}",
                    args.len()
                )))
            }
        };

        Ok(Some(command))
    }
}
