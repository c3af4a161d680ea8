use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    Truncated,
    Parse,
    UnknownFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Wraps a low-level read error, picking the code from its kind so
    /// that short input stays distinguishable from corrupt input.
    pub fn from_io(context: impl fmt::Display, err: io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::UnexpectedEof => CoreErrorCode::Truncated,
            io::ErrorKind::InvalidData => CoreErrorCode::Parse,
            _ => CoreErrorCode::Io,
        };
        Self::new(code, format!("{context}: {err}"))
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}
