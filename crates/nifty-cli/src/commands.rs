//! Input parsing for the interactive company selector

use thiserror::Error;

/// Errors from parsing user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: /{0} (try /help)")]
    Unknown(String),
}

/// Parsed user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Company by its 1-based position in the listing
    Select(usize),
    /// Company by name
    Company(String),
    /// The neutral "None" choice
    Deselect,
    /// Show the company listing
    List,
    /// Show help
    Help,
    /// Exit the viewer
    Exit,
}

impl Command {
    /// Parse a line of user input
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Some(cmd) = input.strip_prefix('/') {
            return match cmd.trim().to_lowercase().as_str() {
                "list" | "ls" | "l" => Ok(Command::List),
                "help" | "h" | "?" => Ok(Command::Help),
                "exit" | "quit" | "q" => Ok(Command::Exit),
                "none" | "clear" => Ok(Command::Deselect),
                other => Err(CommandError::Unknown(other.to_string())),
            };
        }

        if let Ok(n) = input.parse::<usize>() {
            return Ok(if n == 0 {
                Command::Deselect
            } else {
                Command::Select(n)
            });
        }

        if input.eq_ignore_ascii_case("none") {
            return Ok(Command::Deselect);
        }

        Ok(Command::Company(input.to_string()))
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r"
Selecting a company
===================
  <number>        Company by its number in /list (0 = None)
  <name>          Company by name (case-insensitive)
  none            Clear the selection

Commands
========
  /list           Show all companies
  /help           Show help
  /exit           Exit

Aliases: /ls = /list   /? = /help   /q = /exit
"
    }
}
