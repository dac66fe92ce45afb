//! Panel configuration loaded from `transfer-panel.toml`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Timeout, Tool};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "transfer-panel.toml";
/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TRANSFER_PANEL_CONFIG";
/// Environment variable overriding the server base URL.
pub const SERVER_ENV: &str = "TRANSFER_PANEL_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "rsync_defaults")]
    pub rsync: ToolDefaults,
    #[serde(default = "rclone_defaults")]
    pub rclone: ToolDefaults,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { server: ServerConfig::default(), rsync: rsync_defaults(), rclone: rclone_defaults() }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.rsync.validate(Tool::Rsync)?;
        self.rclone.validate(Tool::Rclone)?;
        Ok(())
    }

    pub fn defaults_for(&self, tool: Tool) -> &ToolDefaults {
        match tool {
            Tool::Rsync => &self.rsync,
            Tool::Rclone => &self.rclone,
        }
    }
}

/// Where the execution endpoints live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(AppError::config_error(format!(
                "server.base_url must use http or https, got '{other}'"
            ))),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://127.0.0.1:8188").expect("Default server URL must be valid")
}

/// Initial form values for one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolDefaults {
    /// Falls back to the tool's own default flags when unset.
    #[serde(default)]
    pub flags: Option<String>,
    #[serde(default = "default_true")]
    pub dry_run: bool,
    #[serde(default)]
    pub use_wsl: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
    /// Only read by the rclone pane.
    #[serde(default)]
    pub config_path: String,
}

impl ToolDefaults {
    pub fn for_tool(tool: Tool) -> Self {
        Self {
            flags: Some(tool.default_flags().to_string()),
            dry_run: true,
            use_wsl: false,
            timeout_secs: default_timeout_secs(),
            config_path: String::new(),
        }
    }

    pub fn validate(&self, tool: Tool) -> Result<(), AppError> {
        if !(Timeout::MIN..=Timeout::MAX).contains(&self.timeout_secs) {
            return Err(AppError::config_error(format!(
                "{tool}.timeout_secs must be between {} and {}",
                Timeout::MIN,
                Timeout::MAX
            )));
        }
        if !tool.accepts_config_path() && !self.config_path.is_empty() {
            return Err(AppError::config_error(format!("{tool}.config_path is not supported")));
        }
        Ok(())
    }

    pub fn flags_or_default(&self, tool: Tool) -> &str {
        self.flags.as_deref().unwrap_or(tool.default_flags())
    }
}

fn rsync_defaults() -> ToolDefaults {
    ToolDefaults::for_tool(Tool::Rsync)
}

fn rclone_defaults() -> ToolDefaults {
    ToolDefaults::for_tool(Tool::Rclone)
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u32 {
    Timeout::DEFAULT.seconds()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PanelConfig, AppError> {
    let config: PanelConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Pick the config file: explicit flag, then environment, then `./transfer-panel.toml`.
///
/// Returns the path and whether it was requested explicitly.
pub fn resolve_config_path(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Option<(PathBuf, bool)> {
    if let Some(path) = flag {
        return Some((path, true));
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(value), true));
    }
    let fallback = cwd.join(CONFIG_FILE_NAME);
    fallback.is_file().then_some((fallback, false))
}

/// Load configuration, falling back to defaults when no file is found.
///
/// An explicitly requested file that does not exist is an error.
pub fn load_config(path: Option<(PathBuf, bool)>) -> Result<PanelConfig, AppError> {
    let Some((path, explicit)) = path else {
        return Ok(PanelConfig::default());
    };

    if !path.is_file() {
        if explicit {
            return Err(AppError::ConfigFileNotFound(path.display().to_string()));
        }
        return Ok(PanelConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Apply a server override from a CLI flag or environment variable.
pub fn apply_server_override(
    config: &mut PanelConfig,
    server: Option<&str>,
) -> Result<(), AppError> {
    let Some(raw) = server.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    config.server.base_url = Url::parse(raw)
        .map_err(|e| AppError::config_error(format!("Invalid server URL '{raw}': {e}")))?;
    config.server.validate()
}
