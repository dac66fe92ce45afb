//! Network boundary for job execution.

use async_trait::async_trait;

use crate::domain::{JobRequest, JobResponse, Tool, TransportError};

/// Port for posting a job to a tool's execution endpoint.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait(?Send)]
pub trait JobTransport {
    async fn submit(&self, tool: Tool, request: &JobRequest) -> Result<JobResponse, TransportError>;
}
