use crate::error::LoadError;

/// One-shot load slot for pages that show a document as-is (no filtering).
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Ready(T),
    Failed(LoadError),
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Loading
    }
}

impl<T> Resource<T> {
    pub fn from_result(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(value) => Resource::Ready(value),
            Err(err) => Resource::Failed(err),
        }
    }

    /// Store the load outcome, replacing whatever was there.
    pub fn settle(&mut self, result: Result<T, LoadError>) {
        *self = Self::from_result(result);
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Resource::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Resource::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }
}
