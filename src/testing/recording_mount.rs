use std::cell::RefCell;

use crate::domain::{FormModel, OutputView, Tool, TriggerView};
use crate::ports::MountPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountEvent {
    Pane(Tool),
    Form(FormModel),
    Trigger(Tool, TriggerView),
    Output(OutputView),
    Visible(bool),
}

/// Mount point that keeps every paint call for later inspection.
#[derive(Default)]
pub struct RecordingMount {
    events: RefCell<Vec<MountEvent>>,
}

#[allow(dead_code)]
impl RecordingMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MountEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Most recent trigger state painted for `tool`.
    pub fn trigger(&self, tool: Tool) -> Option<TriggerView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            MountEvent::Trigger(t, view) if *t == tool => Some(view.clone()),
            _ => None,
        })
    }

    /// Current content of the output area.
    pub fn output(&self) -> Option<OutputView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            MountEvent::Output(view) => Some(view.clone()),
            _ => None,
        })
    }

    pub fn active_pane(&self) -> Option<Tool> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            MountEvent::Pane(tool) => Some(*tool),
            _ => None,
        })
    }

    pub fn visible(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            MountEvent::Visible(visible) => Some(*visible),
            _ => None,
        })
    }

    fn push(&self, event: MountEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl MountPoint for RecordingMount {
    fn show_pane(&self, active: Tool) {
        self.push(MountEvent::Pane(active));
    }

    fn show_form(&self, form: &FormModel) {
        self.push(MountEvent::Form(form.clone()));
    }

    fn set_trigger(&self, tool: Tool, trigger: &TriggerView) {
        self.push(MountEvent::Trigger(tool, trigger.clone()));
    }

    fn write_output(&self, output: &OutputView) {
        self.push(MountEvent::Output(output.clone()));
    }

    fn set_visible(&self, visible: bool) {
        self.push(MountEvent::Visible(visible));
    }
}
