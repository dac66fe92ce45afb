//! Presentation boundary: the container a host hands to the panel.

use crate::domain::{FormModel, OutputView, Tool, TriggerView};

/// Surface the panel paints into.
///
/// Methods take `&self` so a mount can be updated while a dispatch for
/// another tool is suspended; implementations use interior mutability.
pub trait MountPoint {
    /// Show `active` and hide every other pane.
    fn show_pane(&self, active: Tool);

    /// Paint a tool's form fields.
    fn show_form(&self, form: &FormModel);

    /// Update a tool's run button.
    fn set_trigger(&self, tool: Tool, trigger: &TriggerView);

    /// Replace the shared output area.
    fn write_output(&self, output: &OutputView);

    /// Show or hide the whole panel. Hosts without visibility control ignore it.
    fn set_visible(&self, _visible: bool) {}
}
