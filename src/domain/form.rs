//! Editable form state for one tool.

use crate::domain::{Timeout, Tool, ToolDefaults, TransferJobConfig};

/// User-editable fields of a tool's pane.
///
/// Values are kept as entered; `snapshot` is the only place they are read
/// into a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    pub tool: Tool,
    pub source: String,
    pub destination: String,
    pub flags: String,
    pub dry_run: bool,
    pub use_wsl: bool,
    /// Raw text of the timeout input.
    pub timeout: String,
    pub config_path: String,
}

impl FormModel {
    pub fn new(tool: Tool) -> Self {
        Self::with_defaults(tool, &ToolDefaults::for_tool(tool))
    }

    pub fn with_defaults(tool: Tool, defaults: &ToolDefaults) -> Self {
        Self {
            tool,
            source: String::new(),
            destination: String::new(),
            flags: defaults.flags_or_default(tool).to_string(),
            dry_run: defaults.dry_run,
            use_wsl: defaults.use_wsl,
            timeout: defaults.timeout_secs.to_string(),
            config_path: defaults.config_path.clone(),
        }
    }

    /// Read the current values into a job config.
    pub fn snapshot(&self) -> TransferJobConfig {
        let config_path = (self.tool.accepts_config_path() && !self.config_path.is_empty())
            .then(|| self.config_path.clone());

        TransferJobConfig {
            tool: self.tool,
            source: self.source.clone(),
            destination: self.destination.clone(),
            flags: self.flags.clone(),
            dry_run: self.dry_run,
            use_alternate_shell_env: self.use_wsl,
            timeout: Timeout::parse(&self.timeout),
            config_path,
        }
    }

    /// Fields in display order, with ids scoped to the tool.
    pub fn fields(&self) -> Vec<FormField> {
        let tool = self.tool;
        let source_hint = match tool {
            Tool::Rsync => "Path to source folder or file",
            Tool::Rclone => "Local path or remote:path",
        };
        let destination_hint = match tool {
            Tool::Rsync => "Path to destination folder",
            Tool::Rclone => "Local path or remote:path",
        };

        let mut fields = vec![
            FormField::text(tool, "source", "Source Path:", source_hint, &self.source),
            FormField::text(
                tool,
                "destination",
                "Destination Path:",
                destination_hint,
                &self.destination,
            ),
        ];
        if tool.accepts_config_path() {
            fields.push(FormField::text(
                tool,
                "config",
                "Config File Path (Optional):",
                "Path to rclone.conf",
                &self.config_path,
            ));
        }
        let (flags_label, flags_hint) = match tool {
            Tool::Rsync => ("Flags:", "rsync flags"),
            Tool::Rclone => ("Command & Flags:", "copy, sync, etc. with flags"),
        };
        fields.push(FormField::text(tool, "flags", flags_label, flags_hint, &self.flags));
        fields.push(FormField::checkbox(
            tool,
            "dry-run",
            "Dry Run (no actual changes)",
            self.dry_run,
        ));
        fields.push(FormField::checkbox(
            tool,
            "wsl",
            "Use WSL (Windows Subsystem for Linux)",
            self.use_wsl,
        ));
        fields.push(FormField {
            id: format!("{tool}-timeout"),
            label: "Timeout (seconds):",
            placeholder: "",
            value: FieldValue::Number(self.timeout.clone()),
        });
        fields
    }
}

/// One rendered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: String,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(String),
    Checkbox(bool),
}

impl FormField {
    fn text(
        tool: Tool,
        key: &str,
        label: &'static str,
        placeholder: &'static str,
        value: &str,
    ) -> Self {
        Self {
            id: format!("{tool}-{key}"),
            label,
            placeholder,
            value: FieldValue::Text(value.to_string()),
        }
    }

    fn checkbox(tool: Tool, key: &str, label: &'static str, checked: bool) -> Self {
        Self {
            id: format!("{tool}-{key}"),
            label,
            placeholder: "",
            value: FieldValue::Checkbox(checked),
        }
    }
}
