//! Registration data the host application consumes.

use serde::Serialize;

use crate::domain::Tool;

pub const EXTENSION_NAME: &str = "Comfy.FileTransferPanel";
pub const SHOW_COMMAND_ID: &str = "show-file-transfer";
pub const SHOW_COMMAND_LABEL: &str = "Show File Transfer Panel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionManifest {
    pub name: &'static str,
    pub version: &'static str,
    pub command: CommandEntry,
    pub menu_path: Vec<&'static str>,
    pub endpoints: Vec<EndpointEntry>,
}

/// The single inbound action the host can invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointEntry {
    pub tool: Tool,
    pub method: &'static str,
    pub path: &'static str,
}

impl ExtensionManifest {
    pub fn current() -> Self {
        Self {
            name: EXTENSION_NAME,
            version: env!("CARGO_PKG_VERSION"),
            command: CommandEntry { id: SHOW_COMMAND_ID, label: SHOW_COMMAND_LABEL },
            menu_path: vec!["Extensions", "File Transfer"],
            endpoints: Tool::ALL
                .into_iter()
                .map(|tool| EndpointEntry { tool, method: "POST", path: tool.endpoint() })
                .collect(),
        }
    }
}
