use std::fmt;

/// Errors that can occur while persisting the session record.
#[derive(Debug)]
pub enum SessionError {
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The stored record could not be serialized or parsed.
    Serde(serde_json::Error),
    /// The in-memory store's lock was poisoned by a panicking thread.
    Poisoned,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "session IO error: {err}"),
            Self::Serde(err) => write!(f, "session record is not valid JSON: {err}"),
            Self::Poisoned => write!(f, "session store lock poisoned"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}
