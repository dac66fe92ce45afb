//! Result rendering: what the output area and triggers display.

use crate::domain::{JobOutcome, Tool, ValidationError};

/// Placeholder shown before any job has run.
pub const IDLE_OUTPUT: &str = "Results will appear here";

/// Label of a trigger while its job is in flight.
pub const RUNNING_LABEL: &str = "Running...";

/// Color cue of the output area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Affirmative,
    Negative,
}

impl Tone {
    /// CSS color value for web hosts.
    pub fn css_color(&self) -> &'static str {
        match self {
            Tone::Neutral => "var(--input-text)",
            Tone::Affirmative => "#8bff87",
            Tone::Negative => "#ff8787",
        }
    }
}

/// Full content of the output area. Each render replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView {
    pub text: String,
    pub tone: Tone,
}

impl OutputView {
    pub fn idle() -> Self {
        Self { text: IDLE_OUTPUT.to_string(), tone: Tone::Neutral }
    }

    pub fn running(tool: Tool) -> Self {
        Self { text: format!("Running {} command...", tool.name()), tone: Tone::Neutral }
    }

    pub fn outcome(outcome: &JobOutcome) -> Self {
        let tone = if outcome.success { Tone::Affirmative } else { Tone::Negative };
        Self { text: outcome.output.clone(), tone }
    }

    pub fn rejected(error: &ValidationError) -> Self {
        Self { text: error.user_message().to_string(), tone: Tone::Negative }
    }
}

/// State of a tool's run button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub enabled: bool,
    pub label: String,
}

impl TriggerView {
    pub fn idle(tool: Tool) -> Self {
        Self { enabled: true, label: tool.run_label() }
    }

    pub fn running() -> Self {
        Self { enabled: false, label: RUNNING_LABEL.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeOrigin, RequiredField};

    #[test]
    fn success_renders_affirmative() {
        let outcome = JobOutcome {
            success: true,
            output: "sent 10 files".to_string(),
            origin: OutcomeOrigin::Completed,
        };
        let view = OutputView::outcome(&outcome);
        assert_eq!(view.text, "sent 10 files");
        assert_eq!(view.tone, Tone::Affirmative);
    }

    #[test]
    fn failure_renders_negative_verbatim() {
        let outcome = JobOutcome {
            success: false,
            output: "rsync error: some files could not be transferred (code 23)".to_string(),
            origin: OutcomeOrigin::ToolFailure,
        };
        let view = OutputView::outcome(&outcome);
        assert_eq!(view.text, outcome.output);
        assert_eq!(view.tone, Tone::Negative);
    }

    #[test]
    fn rejection_renders_negative_message() {
        let view =
            OutputView::rejected(&ValidationError::MissingRequiredField(RequiredField::Source));
        assert_eq!(view.text, "Error: Source and destination paths are required.");
        assert_eq!(view.tone, Tone::Negative);
    }

    #[test]
    fn running_is_neutral() {
        let view = OutputView::running(Tool::Rclone);
        assert_eq!(view.text, "Running rclone command...");
        assert_eq!(view.tone, Tone::Neutral);
        assert_eq!(view.tone.css_color(), "var(--input-text)");
    }

    #[test]
    fn trigger_states() {
        assert_eq!(TriggerView::idle(Tool::Rsync), TriggerView {
            enabled: true,
            label: "Run Rsync".to_string()
        });
        assert!(!TriggerView::running().enabled);
    }
}
