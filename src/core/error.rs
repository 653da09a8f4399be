// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An event or transition was rejected because it is invalid in the
    /// current lifecycle state.
    ///
    /// Examples:
    /// - a raw signal arriving while the daemon is not Running
    /// - starting a daemon that is not Stopped
    InvalidState(StateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    NotStopped,
    NotStarting,
    NotRunning,
    NotStopping,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::NotStopped => write!(f, "not stopped"),
            StateError::NotStarting => write!(f, "not starting"),
            StateError::NotRunning => write!(f, "not running"),
            StateError::NotStopping => write!(f, "not stopping"),
        }
    }
}

impl std::error::Error for Error {}
