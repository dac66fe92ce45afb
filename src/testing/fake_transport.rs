use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{JobRequest, JobResponse, Tool, TransportError};
use crate::ports::JobTransport;

/// Transport that records requests and answers with a scripted reply.
///
/// A gated tool's request stays pending until its `Notify` fires.
pub struct FakeTransport {
    reply: Result<JobResponse, TransportError>,
    requests: RefCell<Vec<(Tool, JobRequest)>>,
    gates: HashMap<Tool, Rc<Notify>>,
}

impl FakeTransport {
    pub fn replying(reply: Result<JobResponse, TransportError>) -> Self {
        Self { reply, requests: RefCell::new(vec![]), gates: HashMap::new() }
    }

    pub fn succeeding(output: &str) -> Self {
        Self::replying(Ok(JobResponse::new(true, output)))
    }

    pub fn gated(mut self, tool: Tool, gate: Rc<Notify>) -> Self {
        self.gates.insert(tool, gate);
        self
    }

    pub fn requests(&self) -> Vec<(Tool, JobRequest)> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl JobTransport for FakeTransport {
    async fn submit(
        &self,
        tool: Tool,
        request: &JobRequest,
    ) -> Result<JobResponse, TransportError> {
        self.requests.borrow_mut().push((tool, request.clone()));
        if let Some(gate) = self.gates.get(&tool) {
            gate.notified().await;
        }
        self.reply.clone()
    }
}
