//! transfer-panel: configure rsync/rclone jobs and dispatch them to a host execution server.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use ports::JobTransport;
use services::HttpJobTransport;

pub use app::{
    ExtensionManifest, HostingMode, JobState, ModalHost, Panel, SidebarHost, SubmitOutcome,
};
pub use domain::{
    AppError, FormModel, JobOutcome, JobRequest, JobResponse, PanelConfig, Timeout, Tool,
    TransferJobConfig, TransportError, ValidationError,
};

/// Load the panel configuration from `path`, or built-in defaults when `None`.
pub fn load_config_at(path: Option<PathBuf>) -> Result<PanelConfig, AppError> {
    domain::configuration::load_config(path.map(|path| (path, true)))
}

/// Manifest describing how a host registers the panel.
pub fn manifest() -> ExtensionManifest {
    ExtensionManifest::current()
}

/// Validate and dispatch one job without any presentation.
///
/// Transport failures are folded into the returned outcome, as the panel would render them.
pub async fn run_transfer(
    config: &PanelConfig,
    job: &TransferJobConfig,
) -> Result<Result<JobOutcome, ValidationError>, AppError> {
    if let Err(err) = domain::validate(job) {
        return Ok(Err(err));
    }

    let transport = HttpJobTransport::from_config(&config.server)?;
    let outcome = match transport.submit(job.tool, &job.to_request()).await {
        Ok(response) => JobOutcome::from_response(&response),
        Err(err) => JobOutcome::transport_failure(job.tool, &err),
    };
    Ok(Ok(outcome))
}
