//! Job dispatch: validate, post once, render, restore.

use std::cell::Cell;

use crate::domain::{
    JobOutcome, OutputView, Tool, TransferJobConfig, TriggerView, ValidationError, validate,
};
use crate::ports::{JobTransport, MountPoint};

/// Per-tool dispatch state. A tool is `Running` from trigger disable to trigger restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobState {
    #[default]
    Idle,
    Running,
}

/// What a submit event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The tool already had a job in flight; the event had no effect.
    Ignored,
    /// A request was sent and its outcome rendered.
    Completed(JobOutcome),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(outcome) if outcome.success)
    }
}

/// Holds a tool in `Running` with its trigger disabled.
///
/// Dropping it restores the trigger and the idle state, so every exit from
/// `dispatch` (including a dropped future) releases the tool.
struct RunningJob<'a, M: MountPoint> {
    tool: Tool,
    state: &'a Cell<JobState>,
    mount: &'a M,
}

impl<'a, M: MountPoint> RunningJob<'a, M> {
    fn start(tool: Tool, state: &'a Cell<JobState>, mount: &'a M) -> Self {
        state.set(JobState::Running);
        mount.set_trigger(tool, &TriggerView::running());
        mount.write_output(&OutputView::running(tool));
        Self { tool, state, mount }
    }
}

impl<M: MountPoint> Drop for RunningJob<'_, M> {
    fn drop(&mut self) {
        self.state.set(JobState::Idle);
        self.mount.set_trigger(self.tool, &TriggerView::idle(self.tool));
    }
}

/// Run one submit cycle for `config.tool`.
///
/// The state check and the switch to `Running` happen before the first
/// suspension point, so a second submit for the same tool can never start
/// a second request.
pub(crate) async fn dispatch<T, M>(
    transport: &T,
    mount: &M,
    state: &Cell<JobState>,
    config: TransferJobConfig,
) -> SubmitOutcome
where
    T: JobTransport,
    M: MountPoint,
{
    let tool = config.tool;

    if state.get() == JobState::Running {
        tracing::debug!(%tool, "submit ignored while a job is in flight");
        return SubmitOutcome::Ignored;
    }

    if let Err(error) = validate(&config) {
        tracing::info!(%tool, %error, "transfer job rejected");
        mount.write_output(&OutputView::rejected(&error));
        return SubmitOutcome::Rejected(error);
    }

    let _running = RunningJob::start(tool, state, mount);
    let request = config.to_request();
    tracing::info!(
        %tool,
        endpoint = tool.endpoint(),
        dry_run = request.dry_run,
        timeout = request.timeout,
        "dispatching transfer job"
    );

    let outcome = match transport.submit(tool, &request).await {
        Ok(response) => JobOutcome::from_response(&response),
        Err(error) => {
            tracing::warn!(%tool, %error, "transfer job failed before a response");
            JobOutcome::transport_failure(tool, &error)
        }
    };

    tracing::info!(
        %tool,
        success = outcome.success,
        origin = ?outcome.origin,
        "transfer job finished"
    );
    mount.write_output(&OutputView::outcome(&outcome));
    SubmitOutcome::Completed(outcome)
}
