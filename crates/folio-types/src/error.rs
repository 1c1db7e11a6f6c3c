use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A category filter named something outside the known set
    UnknownCategory {
        raw: String,
        expected: Vec<&'static str>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory { raw, expected } => write!(
                f,
                "Unknown category '{}' (expected one of: all, {})",
                raw,
                expected.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {}
