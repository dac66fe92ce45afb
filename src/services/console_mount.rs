//! Terminal presentation of the panel.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::domain::{FieldValue, FormModel, OutputView, Tone, Tool, TriggerView};
use crate::ports::MountPoint;

/// Mount point that prints the output area to a writer.
///
/// Trigger and pane changes have no terminal rendering and are only traced.
pub struct ConsoleMount<W: Write> {
    out: RefCell<W>,
    show_forms: bool,
}

impl ConsoleMount<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleMount<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out), show_forms: false }
    }

    /// Also print form contents when they are painted.
    pub fn with_forms(mut self, show_forms: bool) -> Self {
        self.show_forms = show_forms;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn print(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "failed to write panel output");
        }
    }
}

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "⏳",
        Tone::Affirmative => "✅",
        Tone::Negative => "❌",
    }
}

impl<W: Write> MountPoint for ConsoleMount<W> {
    fn show_pane(&self, active: Tool) {
        tracing::debug!(pane = %active, "pane activated");
    }

    fn show_form(&self, form: &FormModel) {
        if !self.show_forms {
            return;
        }
        self.print(&format!("{}:", form.tool.display_name()));
        for field in form.fields() {
            let value = match field.value {
                FieldValue::Text(text) | FieldValue::Number(text) => text,
                FieldValue::Checkbox(checked) => (if checked { "[x]" } else { "[ ]" }).to_string(),
            };
            self.print(&format!("  {} {}", field.label, value));
        }
    }

    fn set_trigger(&self, tool: Tool, trigger: &TriggerView) {
        tracing::debug!(
            %tool,
            enabled = trigger.enabled,
            label = %trigger.label,
            "trigger updated"
        );
    }

    fn write_output(&self, output: &OutputView) {
        // Nothing to show before the first job.
        if *output == OutputView::idle() {
            return;
        }
        self.print(&format!("{} {}", marker(output.tone), output.text));
    }

    fn set_visible(&self, visible: bool) {
        tracing::debug!(visible, "panel visibility changed");
    }
}
