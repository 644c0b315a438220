use std::fmt;

#[derive(Debug)]
pub enum HsmError {
    /// File could not be opened for inspection
    Path(String),
    /// Host storage attribute call failed or reported an unusable size
    AttributeFetch(String),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for HsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HsmError::Path(msg) => write!(f, "Path error: {msg}"),
            HsmError::AttributeFetch(msg) => write!(f, "Attribute fetch error: {msg}"),
            HsmError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for HsmError {}

impl From<std::io::Error> for HsmError {
    fn from(err: std::io::Error) -> Self {
        HsmError::Io(err)
    }
}

/// Result type alias for HSM state operations
pub type HsmResult<T> = Result<T, HsmError>;
