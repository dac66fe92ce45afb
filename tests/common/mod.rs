//! Shared testing harness for `transfer-panel` integration tests.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use transfer_panel::domain::{FormModel, OutputView, Tool, TriggerView};
use transfer_panel::ports::MountPoint;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` as `transfer-panel.toml` in the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("transfer-panel.toml", content)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Command for the compiled binary, with the caller's environment overrides cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("transfer-panel").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir())
            .env_remove("TRANSFER_PANEL_SERVER")
            .env_remove("TRANSFER_PANEL_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Mount point keeping the last painted state, for library-level tests.
#[allow(dead_code)]
#[derive(Default)]
pub struct CapturingMount {
    pub outputs: RefCell<Vec<OutputView>>,
    pub triggers: RefCell<Vec<(Tool, TriggerView)>>,
    pub panes: RefCell<Vec<Tool>>,
}

#[allow(dead_code)]
impl CapturingMount {
    pub fn last_output(&self) -> OutputView {
        self.outputs.borrow().last().cloned().expect("no output painted")
    }

    pub fn last_trigger(&self, tool: Tool) -> TriggerView {
        self.triggers
            .borrow()
            .iter()
            .rev()
            .find(|(t, _)| *t == tool)
            .map(|(_, trigger)| trigger.clone())
            .expect("no trigger painted")
    }
}

impl MountPoint for CapturingMount {
    fn show_pane(&self, active: Tool) {
        self.panes.borrow_mut().push(active);
    }

    fn show_form(&self, _form: &FormModel) {}

    fn set_trigger(&self, tool: Tool, trigger: &TriggerView) {
        self.triggers.borrow_mut().push((tool, trigger.clone()));
    }

    fn write_output(&self, output: &OutputView) {
        self.outputs.borrow_mut().push(output.clone());
    }
}
