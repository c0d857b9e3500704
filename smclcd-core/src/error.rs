//! Error types for display session operations

use std::io;
use std::time::Duration;

use smclcd_protocol::{CursorError, ReportError};
use thiserror::Error;

/// Display session error type
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failed to open, read or write
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Cursor moved before the first cell
    #[error("cursor: negative position {0}")]
    NegativePosition(i32),

    /// Cursor moved past the last cell
    #[error("end of display")]
    EndOfDisplay,

    /// No matching response arrived within the response timeout
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// Key report with a code or event outside the known set
    #[error("unknown key report: code {code:#04x}, event {event:#04x}")]
    UnknownKey { code: u8, event: u8 },

    /// Command could not be encoded into a report
    #[error("report error: {0}")]
    Report(ReportError),
}

impl Error {
    /// Wrap a transport error
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(err))
    }

    /// Returns true for the end-of-display condition
    pub fn is_end_of_display(&self) -> bool {
        matches!(self, Error::EndOfDisplay)
    }
}

impl From<CursorError> for Error {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::NegativePosition(pos) => Error::NegativePosition(pos),
            CursorError::EndOfDisplay => Error::EndOfDisplay,
        }
    }
}

impl From<ReportError> for Error {
    fn from(err: ReportError) -> Self {
        Error::Report(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::EndOfDisplay => io::ErrorKind::UnexpectedEof,
            Error::Timeout(_) => io::ErrorKind::TimedOut,
            Error::NegativePosition(_) | Error::Report(_) => io::ErrorKind::InvalidInput,
            Error::UnknownKey { .. } => io::ErrorKind::InvalidData,
            Error::Transport(_) => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

/// Result type for display session operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_error_conversion() {
        assert!(matches!(
            Error::from(CursorError::NegativePosition(-3)),
            Error::NegativePosition(-3)
        ));
        assert!(Error::from(CursorError::EndOfDisplay).is_end_of_display());
    }

    #[test]
    fn test_io_error_kinds() {
        let err: io::Error = Error::Timeout(Duration::from_millis(5)).into();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);

        let err: io::Error = Error::NegativePosition(-1).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::UnknownKey {
                code: 0x09,
                event: 0x01
            }
            .to_string(),
            "unknown key report: code 0x09, event 0x01"
        );
        assert_eq!(
            Error::Report(ReportError::CommandTooLong).to_string(),
            "report error: command exceeds 14 bytes"
        );
    }
}
