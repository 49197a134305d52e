//! Shell input errors
//!
//! Every variant describes bad user input at the prompt. None of them end the
//! session: the shell prints the message and asks again.

use crate::geo::GeoError;
use crate::view::ViewError;
use thiserror::Error;

/// Errors from parsing or executing a shell line
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShellError {
    /// Command word not recognized
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    UnknownCommand(String),

    /// Required argument missing
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Argument is not a number
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// Coordinate could not be built
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Page size or surface name rejected
    #[error(transparent)]
    View(#[from] ViewError),

    /// No point with that number
    #[error("No point #{0}")]
    NoSuchPoint(usize),

    /// Reading from the terminal failed
    #[error("Failed to read input: {0}")]
    Input(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
