// src/transport/http.rs

use super::{Transport, TransportError};
use crate::chunker::Chunk;
use crate::errors::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Request body for one chunk.
#[derive(Serialize)]
struct ChunkPayload<'a> {
    content: &'a str,
}

/// Posts each chunk as `{"content": "..."}` JSON to a fixed endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// # Errors
    /// Returns `Error::Config` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&self, chunk: &Chunk) -> std::result::Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .json(&ChunkPayload {
                content: &chunk.content,
            })
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
            })
        }
    }
}
