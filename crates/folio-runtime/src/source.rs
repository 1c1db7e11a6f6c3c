//! Filesystem and HTTP content sources.

use std::path::PathBuf;
use std::time::Duration;

use folio_core::{ContentSource, LoadError};

use crate::Result;
use crate::config::ContentLocation;

/// Reads `<root>/<document>` from disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, document: &str) -> std::result::Result<Vec<u8>, LoadError> {
        let path = self.root.join(document);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Transport(format!("{}: {}", path.display(), e)),
        })
    }
}

/// GETs `<base>/<document>`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: reqwest::Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    fn url(&self, document: &str) -> String {
        format!("{}/{}", self.base, document.trim_start_matches('/'))
    }
}

impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.base.clone()
    }

    async fn fetch(&self, document: &str) -> std::result::Result<Vec<u8>, LoadError> {
        let url = self.url(document);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Transport(format!("{}: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound(url));
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                document: url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(format!("{}: {}", url, e)))?;
        Ok(body.to_vec())
    }
}

/// Either source, picked from a [`ContentLocation`].
#[derive(Debug, Clone)]
pub enum Source {
    Fs(FsSource),
    Http(HttpSource),
}

impl Source {
    pub fn from_location(location: &ContentLocation) -> Result<Self> {
        Ok(match location {
            ContentLocation::Dir(path) => Source::Fs(FsSource::new(path.clone())),
            ContentLocation::Url(url) => Source::Http(HttpSource::new(url.clone())?),
        })
    }
}

impl ContentSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::Fs(source) => source.describe(),
            Source::Http(source) => source.describe(),
        }
    }

    async fn fetch(&self, document: &str) -> std::result::Result<Vec<u8>, LoadError> {
        match self {
            Source::Fs(source) => source.fetch(document).await,
            Source::Http(source) => source.fetch(document).await,
        }
    }
}
