//! Where content documents come from.
//!
//! A [`ContentSource`] only knows how to produce the raw bytes of a named
//! document; decoding and error classification of the payload happen here
//! so every source reports malformed content the same way.

use std::collections::HashMap;
use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

pub trait ContentSource: Send + Sync {
    /// Human-readable location, used in logs and `check` output
    fn describe(&self) -> String;

    /// Read `document` once. No retries, no caching.
    fn fetch(&self, document: &str) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;
}

pub fn decode<D: DeserializeOwned>(document: &str, bytes: &[u8]) -> Result<D, LoadError> {
    serde_json::from_slice(bytes)
        .map_err(|e| LoadError::Malformed(format!("{}: {}", document, e)))
}

/// Fetch and decode one document, logging the outcome.
pub async fn fetch_document<D, S>(source: &S, document: &str) -> Result<D, LoadError>
where
    D: DeserializeOwned,
    S: ContentSource,
{
    tracing::debug!(document, source = %source.describe(), "loading document");
    let result = source
        .fetch(document)
        .await
        .and_then(|bytes| decode(document, &bytes));
    match &result {
        Ok(_) => tracing::debug!(document, "document loaded"),
        Err(err) => tracing::warn!(document, error = %err, "document failed to load"),
    }
    result
}

/// In-memory documents, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
    failures: HashMap<String, LoadError>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: &str, body: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(name.to_string(), body.into());
        self
    }

    /// Make `name` fail with `error` on every fetch.
    pub fn with_failure(mut self, name: &str, error: LoadError) -> Self {
        self.failures.insert(name.to_string(), error);
        self
    }
}

impl ContentSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError> {
        if let Some(err) = self.failures.get(document) {
            return Err(err.clone());
        }
        self.documents
            .get(document)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(document.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let source = MemorySource::new();
        let err = fetch_document::<Vec<u32>, _>(&source, "projects.json")
            .await
            .unwrap_err();
        assert_eq!(err, LoadError::NotFound("projects.json".into()));
    }

    #[tokio::test]
    async fn test_bad_json_is_malformed() {
        let source = MemorySource::new().with_document("projects.json", "[1, 2,");
        let err = fetch_document::<Vec<u32>, _>(&source, "projects.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(msg) if msg.starts_with("projects.json: ")));
    }

    #[tokio::test]
    async fn test_decodes_document() {
        let source = MemorySource::new().with_document("n.json", "[1, 2, 3]");
        let values: Vec<u32> = fetch_document(&source, "n.json").await.unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
