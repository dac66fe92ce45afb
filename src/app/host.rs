//! Hosting adapters: the same panel shown as a modal overlay or a sidebar tab.

use std::cell::Cell;

use crate::app::Panel;
use crate::domain::PanelConfig;
use crate::ports::{JobTransport, MountPoint};

/// How the host presents the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HostingMode {
    /// Overlay toggled by a menu command
    #[default]
    Modal,
    /// Persistent sidebar tab
    Sidebar,
}

/// Panel shown in an overlay the host toggles from a menu command.
pub struct ModalHost<T: JobTransport, M: MountPoint> {
    panel: Panel<T, M>,
    visible: Cell<bool>,
}

impl<T: JobTransport, M: MountPoint> ModalHost<T, M> {
    /// Paint the panel and start hidden.
    pub fn new(panel: Panel<T, M>) -> Self {
        panel.attach();
        panel.mount_point().set_visible(false);
        Self { panel, visible: Cell::new(false) }
    }

    /// The "show/hide panel" command. Returns the new visibility.
    pub fn toggle(&self) -> bool {
        let visible = !self.visible.get();
        self.set_visible(visible);
        visible
    }

    pub fn show(&self) {
        self.set_visible(true);
    }

    /// Close button and clicks on the backdrop.
    pub fn close(&self) {
        self.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn panel(&self) -> &Panel<T, M> {
        &self.panel
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
        self.panel.mount_point().set_visible(visible);
    }
}

/// Panel rendered into a container the host supplies for a sidebar tab.
pub struct SidebarHost<T: JobTransport, M: MountPoint> {
    panel: Panel<T, M>,
}

impl<T: JobTransport, M: MountPoint> SidebarHost<T, M> {
    /// Build the panel inside `container` and paint it.
    pub fn render_into(transport: T, container: M, config: &PanelConfig) -> Self {
        let panel = Panel::with_config(transport, container, config);
        panel.attach();
        Self { panel }
    }

    pub fn panel(&self) -> &Panel<T, M> {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutputView, Tool};
    use crate::testing::{FakeTransport, RecordingMount};

    #[test]
    fn modal_starts_hidden_and_toggles() {
        let panel = Panel::new(FakeTransport::succeeding("ok"), RecordingMount::new());
        let host = ModalHost::new(panel);
        assert!(!host.is_visible());
        assert_eq!(host.panel().mount_point().visible(), Some(false));

        assert!(host.toggle());
        assert_eq!(host.panel().mount_point().visible(), Some(true));

        assert!(!host.toggle());
        host.show();
        host.close();
        assert!(!host.is_visible());
        assert_eq!(host.panel().mount_point().visible(), Some(false));
    }

    #[test]
    fn sidebar_paints_into_container() {
        let host = SidebarHost::render_into(
            FakeTransport::succeeding("ok"),
            RecordingMount::new(),
            &PanelConfig::default(),
        );
        let mount = host.panel().mount_point();
        assert_eq!(mount.active_pane(), Some(Tool::Rsync));
        assert_eq!(mount.output(), Some(OutputView::idle()));
        assert_eq!(mount.visible(), None);
    }

    #[tokio::test]
    async fn both_hosts_dispatch_identically() {
        let panel = Panel::new(FakeTransport::succeeding("sent"), RecordingMount::new());
        let modal = ModalHost::new(panel);
        let sidebar = SidebarHost::render_into(
            FakeTransport::succeeding("sent"),
            RecordingMount::new(),
            &PanelConfig::default(),
        );

        for panel in [modal.panel(), sidebar.panel()] {
            panel.edit_form(Tool::Rclone, |form| {
                form.source = "remote:bucket".to_string();
                form.destination = "/data".to_string();
            });
            assert!(panel.submit(Tool::Rclone).await.is_success());
        }

        assert_eq!(modal.panel().transport().requests(), sidebar.panel().transport().requests());
        assert_eq!(modal.panel().mount_point().output(), sidebar.panel().mount_point().output());
    }
}
