//! Transfer job configuration, wire request/response and outcome.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Tool, TransportError};

/// Placeholder rendered when a response carries no output text.
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output returned";

/// Execution time budget forwarded to the server, in seconds.
///
/// Always within `MIN..=MAX`; anything else collapses to `DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeout(u32);

impl Timeout {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 3600;
    pub const DEFAULT: Timeout = Timeout(300);

    /// Coerce a number of seconds into range.
    pub fn from_seconds(seconds: i64) -> Self {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&seconds) {
            Timeout(seconds as u32)
        } else {
            Self::DEFAULT
        }
    }

    /// Coerce raw form text.
    ///
    /// Reads the leading integer the way a number input is read (`"45s"` is 45);
    /// blank, unparsable or out-of-range text yields the default.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let unsigned = &trimmed[sign_len..];
        let digits_len =
            unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
        if digits_len == 0 {
            return Self::DEFAULT;
        }

        trimmed[..sign_len + digits_len]
            .parse::<i64>()
            .map(Self::from_seconds)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One tool invocation as read from the form at submit time.
///
/// Moved into the dispatcher and dropped once the outcome is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferJobConfig {
    pub tool: Tool,
    pub source: String,
    pub destination: String,
    pub flags: String,
    pub dry_run: bool,
    pub use_alternate_shell_env: bool,
    pub timeout: Timeout,
    /// Only meaningful for rclone; ignored for rsync.
    pub config_path: Option<String>,
}

impl TransferJobConfig {
    /// Config with empty fields and default flags for `tool`.
    pub fn new(tool: Tool, source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            tool,
            source: source.into(),
            destination: destination.into(),
            flags: tool.default_flags().to_string(),
            dry_run: true,
            use_alternate_shell_env: false,
            timeout: Timeout::DEFAULT,
            config_path: None,
        }
    }

    /// Build the wire request body.
    pub fn to_request(&self) -> JobRequest {
        JobRequest {
            source: self.source.clone(),
            destination: self.destination.clone(),
            flags: self.flags.clone(),
            dry_run: self.dry_run,
            use_wsl: self.use_alternate_shell_env,
            timeout: self.timeout.seconds(),
            config_path: self
                .tool
                .accepts_config_path()
                .then(|| self.config_path.clone().unwrap_or_default()),
        }
    }
}

/// JSON body posted to a tool endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    pub source: String,
    pub destination: String,
    pub flags: String,
    pub dry_run: bool,
    pub use_wsl: bool,
    pub timeout: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

/// JSON body returned by a tool endpoint.
///
/// Fields stay loosely typed: a missing or falsy `success` is failure and a
/// missing `output` renders as the placeholder. Only a JSON object decodes;
/// arrays are not read positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobResponse {
    pub success: Option<Value>,
    pub output: Option<Value>,
}

impl<'de> Deserialize<'de> for JobResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(mut fields) => {
                Ok(Self { success: fields.remove("success"), output: fields.remove("output") })
            }
            other => Err(de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl JobResponse {
    pub fn new(success: bool, output: impl Into<String>) -> Self {
        Self { success: Some(Value::Bool(success)), output: Some(Value::String(output.into())) }
    }

    pub fn is_success(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy)
    }

    /// Output text, or `None` when it is absent or empty.
    pub fn output_text(&self) -> Option<String> {
        match self.output.as_ref()? {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Where a job result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeOrigin {
    /// Tool ran and reported success.
    Completed,
    /// Tool ran and reported failure; output is its own diagnostics.
    ToolFailure,
    /// No usable response was obtained.
    Transport,
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub success: bool,
    pub output: String,
    pub origin: OutcomeOrigin,
}

impl JobOutcome {
    pub fn from_response(response: &JobResponse) -> Self {
        let success = response.is_success();
        Self {
            success,
            output: response.output_text().unwrap_or_else(|| NO_OUTPUT_PLACEHOLDER.to_string()),
            origin: if success { OutcomeOrigin::Completed } else { OutcomeOrigin::ToolFailure },
        }
    }

    /// Synthesize a failed outcome for a request that never produced a response.
    pub fn transport_failure(tool: Tool, error: &TransportError) -> Self {
        let reason = error.reason().unwrap_or_else(|| format!("Failed to run {}", tool.name()));
        Self {
            success: false,
            output: format!("Error: {reason}"),
            origin: OutcomeOrigin::Transport,
        }
    }
}
