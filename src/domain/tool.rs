//! The two wrapped transfer utilities and their per-tool constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A wrapped external transfer utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Local/remote mirroring tool.
    Rsync,
    /// Cloud-remote transfer tool.
    Rclone,
}

impl Tool {
    /// Both tools, in pane order.
    pub const ALL: [Tool; 2] = [Tool::Rsync, Tool::Rclone];

    /// Lowercase identifier, also used as the pane name.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Rsync => "rsync",
            Tool::Rclone => "rclone",
        }
    }

    /// Capitalized name shown on tab buttons.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Rsync => "Rsync",
            Tool::Rclone => "Rclone",
        }
    }

    /// Path of the execution endpoint, relative to the server origin.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Tool::Rsync => "/rsync/run",
            Tool::Rclone => "/rclone/run",
        }
    }

    /// Label of the idle trigger.
    pub fn run_label(&self) -> String {
        format!("Run {}", self.display_name())
    }

    /// Flags pre-filled in a fresh form.
    pub fn default_flags(&self) -> &'static str {
        match self {
            Tool::Rsync => "-avz",
            Tool::Rclone => "copy",
        }
    }

    /// Whether the wire request carries a `config_path` field.
    pub fn accepts_config_path(&self) -> bool {
        matches!(self, Tool::Rclone)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rsync" => Ok(Tool::Rsync),
            "rclone" => Ok(Tool::Rclone),
            _ => Err(AppError::InvalidPane(value.to_string())),
        }
    }
}
