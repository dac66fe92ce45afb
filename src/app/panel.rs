//! The presentation-agnostic panel component.

use std::cell::{Cell, Ref, RefCell};

use crate::app::dispatcher::{self, JobState, SubmitOutcome};
use crate::domain::{FormModel, OutputView, PaneSelector, PanelConfig, Tool, TriggerView};
use crate::ports::{JobTransport, MountPoint};

struct ToolSlot {
    form: RefCell<FormModel>,
    state: Cell<JobState>,
}

impl ToolSlot {
    fn new(tool: Tool, config: &PanelConfig) -> Self {
        Self {
            form: RefCell::new(FormModel::with_defaults(tool, config.defaults_for(tool))),
            state: Cell::new(JobState::Idle),
        }
    }
}

/// File transfer panel bound to a transport and a mount point.
///
/// Each tool owns its form and dispatch state; the two never share mutable
/// state, so their jobs may be in flight at the same time. The panel is
/// driven from a single thread.
pub struct Panel<T: JobTransport, M: MountPoint> {
    transport: T,
    mount: M,
    panes: Cell<PaneSelector>,
    rsync: ToolSlot,
    rclone: ToolSlot,
}

impl<T: JobTransport, M: MountPoint> Panel<T, M> {
    pub fn new(transport: T, mount: M) -> Self {
        Self::with_config(transport, mount, &PanelConfig::default())
    }

    pub fn with_config(transport: T, mount: M, config: &PanelConfig) -> Self {
        Self {
            transport,
            mount,
            panes: Cell::new(PaneSelector::new()),
            rsync: ToolSlot::new(Tool::Rsync, config),
            rclone: ToolSlot::new(Tool::Rclone, config),
        }
    }

    /// Paint the full current state into the mount point.
    pub fn attach(&self) {
        self.mount.show_pane(self.active_pane());
        for tool in Tool::ALL {
            let slot = self.slot(tool);
            self.mount.show_form(&slot.form.borrow());
            let trigger = match slot.state.get() {
                JobState::Idle => TriggerView::idle(tool),
                JobState::Running => TriggerView::running(),
            };
            self.mount.set_trigger(tool, &trigger);
        }
        self.mount.write_output(&OutputView::idle());
    }

    pub fn active_pane(&self) -> Tool {
        self.panes.get().active()
    }

    /// Activate one pane; the other is deactivated.
    pub fn select_pane(&self, tool: Tool) {
        let mut panes = self.panes.get();
        if panes.select(tool) {
            tracing::debug!(pane = %tool, "pane selected");
        }
        self.panes.set(panes);
        self.mount.show_pane(tool);
    }

    /// Current form values for `tool`.
    pub fn form(&self, tool: Tool) -> Ref<'_, FormModel> {
        self.slot(tool).form.borrow()
    }

    /// Edit a tool's form and repaint it. Edits never reach an in-flight job.
    pub fn edit_form(&self, tool: Tool, edit: impl FnOnce(&mut FormModel)) {
        let slot = self.slot(tool);
        {
            let mut form = slot.form.borrow_mut();
            edit(&mut *form);
        }
        self.mount.show_form(&slot.form.borrow());
    }

    pub fn job_state(&self, tool: Tool) -> JobState {
        self.slot(tool).state.get()
    }

    /// Handle a click on `tool`'s run trigger.
    pub async fn submit(&self, tool: Tool) -> SubmitOutcome {
        let slot = self.slot(tool);
        let config = slot.form.borrow().snapshot();
        dispatcher::dispatch(&self.transport, &self.mount, &slot.state, config).await
    }

    pub fn mount_point(&self) -> &M {
        &self.mount
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn slot(&self, tool: Tool) -> &ToolSlot {
        match tool {
            Tool::Rsync => &self.rsync,
            Tool::Rclone => &self.rclone,
        }
    }
}
