use std::fmt;

/// Result type for cnustat-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the parser layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Loading the raw log failed
    Load(cnustat_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Load(err) => write!(f, "Log load error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Load(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<cnustat_types::Error> for Error {
    fn from(err: cnustat_types::Error) -> Self {
        Error::Load(err)
    }
}
