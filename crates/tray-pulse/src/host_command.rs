use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tray_pulse_core::Status;

/// Commands read from standard input and applied to the status icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Show a new status.
    SetStatus(Status),
    /// Switch the icon theme by name.
    SetTheme(String),
    /// Stop the host.
    Shutdown,
}

impl HostCommand {
    /// Parse one input line.
    ///
    /// Accepts `status <word>`, `theme <name>`, `quit`/`exit`, or a bare status
    /// word. Blank lines and `#` comments yield `None`.
    #[track_caller]
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let (Some(head), arg, rest) = (words.next(), words.next(), words.next()) else {
            return Ok(None);
        };

        if rest.is_some() {
            return Err(AppError::InvalidCommand {
                reason: format!("Too many arguments in '{}'", line),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let command = match (head, arg) {
            ("quit" | "exit", None) => HostCommand::Shutdown,
            ("status", Some(word)) => HostCommand::SetStatus(Status::parse(word)),
            ("theme", Some(name)) => HostCommand::SetTheme(name.to_string()),
            ("status" | "theme", None) => {
                return Err(AppError::InvalidCommand {
                    reason: format!("'{}' needs an argument", head),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            (word, None) => HostCommand::SetStatus(Status::parse(word)),
            (_, Some(_)) => {
                return Err(AppError::InvalidCommand {
                    reason: format!("Unknown command '{}'", head),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Some(command))
    }
}
