use std::fmt;

/// Why a content document could not be turned into page state.
///
/// Loads are never retried; the page shows an empty/failed state instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The document does not exist at the source
    NotFound(String),

    /// The source answered with a non-success status
    Status { document: String, status: u16 },

    /// Network or filesystem failure before a response was read
    Transport(String),

    /// The payload was read but is not a valid document
    Malformed(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(document) => write!(f, "Document not found: {}", document),
            LoadError::Status { document, status } => {
                write!(f, "Unexpected status {} for {}", status, document)
            }
            LoadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            LoadError::Malformed(msg) => write!(f, "Malformed document: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}
