use std::time::Duration;

use folio_types::ContactMessage;
use serde::Deserialize;

use crate::{Error, Result};

/// Error body returned by form-processing endpoints
#[derive(Debug, Deserialize)]
struct Rejection {
    #[serde(default)]
    error: Option<String>,
}

/// Forwards contact messages to a third-party form endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// POST `message` as JSON. Sent exactly once.
    pub async fn submit(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!(endpoint = %self.endpoint, "submitting contact message");
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Rejection>(&body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_else(|| "Submission failed".to_string());
        tracing::warn!(status = status.as_u16(), error = %message, "contact message rejected");
        Err(Error::Submission {
            status: status.as_u16(),
            message,
        })
    }
}
