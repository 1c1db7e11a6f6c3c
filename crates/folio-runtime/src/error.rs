use std::fmt;

use folio_core::LoadError;

/// Result type for folio-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// A content document could not be loaded
    Load(LoadError),

    /// IO operation failed
    Io(std::io::Error),

    /// HTTP client could not be built or the request failed
    Http(reqwest::Error),

    /// Configuration error
    Config(String),

    /// The contact endpoint rejected a submission
    Submission { status: u16, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(err) => write!(f, "Load error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Submission { status, message } => {
                write!(f, "Submission rejected ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Config(_) | Error::Submission { .. } => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
