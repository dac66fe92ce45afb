//! Job transport implementation using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{AppError, JobRequest, JobResponse, ServerConfig, Tool, TransportError};
use crate::ports::JobTransport;

/// HTTP client for the tool execution endpoints.
///
/// Built without a request timeout: the server bounds execution using the
/// `timeout` field of each request.
#[derive(Debug, Clone)]
pub struct HttpJobTransport {
    base_url: Url,
    client: Client,
}

impl HttpJobTransport {
    /// Create a new transport posting to endpoints under `base_url`.
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, AppError> {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL for `tool`, resolved against the server origin.
    pub fn endpoint(&self, tool: Tool) -> Result<Url, TransportError> {
        self.base_url
            .join(tool.endpoint())
            .map_err(|e| TransportError::Request(format!("Invalid endpoint URL: {}", e)))
    }
}

#[async_trait(?Send)]
impl JobTransport for HttpJobTransport {
    async fn submit(
        &self,
        tool: Tool,
        request: &JobRequest,
    ) -> Result<JobResponse, TransportError> {
        let url = self.endpoint(tool)?;
        tracing::debug!(%url, ?request, "posting transfer job");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Request(e.to_string()))?;

        // Any body that decodes as a job result is rendered, whatever the status.
        match serde_json::from_str::<JobResponse>(&body) {
            Ok(result) => Ok(result),
            Err(_) if !status.is_success() => {
                let body = body.trim().to_string();
                Err(TransportError::Status { status: status.as_u16(), body })
            }
            Err(e) => Err(TransportError::Decode(format!("Failed to parse response: {}", e))),
        }
    }
}
