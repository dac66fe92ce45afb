pub mod cli;
mod dispatcher;
mod host;
pub mod logging;
pub mod manifest;
mod panel;

pub use dispatcher::{JobState, SubmitOutcome};
pub use host::{HostingMode, ModalHost, SidebarHost};
pub use manifest::ExtensionManifest;
pub use panel::Panel;
