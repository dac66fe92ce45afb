//! Job subcommands: fill a tool's form from flags, then submit it once.

use std::io::ErrorKind;

use clap::Args;
use dialoguer::{Confirm, Error as DialoguerError, Input};

use super::GlobalOptions;
use crate::app::{HostingMode, ModalHost, Panel, SidebarHost, SubmitOutcome};
use crate::domain::configuration::{
    CONFIG_ENV, apply_server_override, load_config, resolve_config_path,
};
use crate::domain::{AppError, FormModel, PanelConfig, Tool};
use crate::ports::{JobTransport, MountPoint};
use crate::services::{ConsoleMount, HttpJobTransport};

#[derive(Args, Debug, Default)]
pub struct JobArgs {
    /// Source path (a trailing slash matters to rsync)
    #[arg(short, long)]
    pub source: Option<String>,
    /// Destination path
    #[arg(short, long)]
    pub destination: Option<String>,
    /// Tool flags, passed through verbatim
    #[arg(short, long, allow_hyphen_values = true)]
    pub flags: Option<String>,
    /// Force a dry run
    #[arg(long, conflicts_with = "no_dry_run")]
    pub dry_run: bool,
    /// Apply changes instead of a dry run
    #[arg(long)]
    pub no_dry_run: bool,
    /// Run the tool inside WSL
    #[arg(long)]
    pub wsl: bool,
    /// Timeout in seconds (1-3600, anything else falls back to 300)
    #[arg(short, long)]
    pub timeout: Option<String>,
    /// Prompt for every field before submitting
    #[arg(short, long)]
    pub interactive: bool,
    /// Print the form before submitting
    #[arg(long)]
    pub show_form: bool,
}

pub(crate) async fn run_job(
    globals: &GlobalOptions,
    tool: Tool,
    args: JobArgs,
    config_path: Option<String>,
) -> Result<i32, AppError> {
    let config = load_panel_config(globals)?;
    let transport = HttpJobTransport::from_config(&config.server)?;
    let mount = ConsoleMount::stdout().with_forms(args.show_form);
    tracing::debug!(base_url = %config.server.base_url, mode = ?globals.mode, "panel configured");

    let outcome = match globals.mode {
        HostingMode::Modal => {
            let host = ModalHost::new(Panel::with_config(transport, mount, &config));
            host.show();
            submit(host.panel(), tool, &args, config_path).await?
        }
        HostingMode::Sidebar => {
            let host = SidebarHost::render_into(transport, mount, &config);
            submit(host.panel(), tool, &args, config_path).await?
        }
    };

    Ok(exit_code(&outcome))
}

fn load_panel_config(globals: &GlobalOptions) -> Result<PanelConfig, AppError> {
    let cwd = std::env::current_dir()?;
    let path = resolve_config_path(globals.config.clone(), std::env::var_os(CONFIG_ENV), &cwd);
    let mut config = load_config(path)?;
    apply_server_override(&mut config, globals.server.as_deref())?;
    Ok(config)
}

async fn submit<T: JobTransport, M: MountPoint>(
    panel: &Panel<T, M>,
    tool: Tool,
    args: &JobArgs,
    config_path: Option<String>,
) -> Result<SubmitOutcome, AppError> {
    panel.select_pane(tool);
    panel.edit_form(tool, |form| apply_args(form, args, config_path));

    if args.interactive {
        let mut form = panel.form(tool).clone();
        prompt_form(&mut form)?;
        panel.edit_form(tool, |current| *current = form);
    }

    Ok(panel.submit(tool).await)
}

fn apply_args(form: &mut FormModel, args: &JobArgs, config_path: Option<String>) {
    if let Some(source) = &args.source {
        form.source = source.clone();
    }
    if let Some(destination) = &args.destination {
        form.destination = destination.clone();
    }
    if let Some(flags) = &args.flags {
        form.flags = flags.clone();
    }
    if args.no_dry_run {
        form.dry_run = false;
    } else if args.dry_run {
        form.dry_run = true;
    }
    if args.wsl {
        form.use_wsl = true;
    }
    if let Some(timeout) = &args.timeout {
        form.timeout = timeout.clone();
    }
    if let Some(path) = config_path {
        form.config_path = path;
    }
}

fn exit_code(outcome: &SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Completed(result) if result.success => 0,
        SubmitOutcome::Completed(_) | SubmitOutcome::Ignored => 1,
        SubmitOutcome::Rejected(_) => 2,
    }
}

fn prompt_form(form: &mut FormModel) -> Result<(), AppError> {
    form.source = prompt_text("Source path", &form.source)?;
    form.destination = prompt_text("Destination path", &form.destination)?;
    if form.tool.accepts_config_path() {
        form.config_path = prompt_text("Config file path (optional)", &form.config_path)?;
    }
    let flags_prompt = match form.tool {
        Tool::Rsync => "Flags",
        Tool::Rclone => "Command & flags",
    };
    form.flags = prompt_text(flags_prompt, &form.flags)?;
    form.dry_run = prompt_confirm("Dry run (no actual changes)", form.dry_run)?;
    form.use_wsl = prompt_confirm("Use WSL (Windows Subsystem for Linux)", form.use_wsl)?;
    form.timeout = prompt_text("Timeout (seconds)", &form.timeout)?;
    Ok(())
}

fn prompt_text(label: &str, current: &str) -> Result<String, AppError> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    input.interact_text().map_err(|err| prompt_error(label, err))
}

fn prompt_confirm(label: &str, current: bool) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(label)
        .default(current)
        .interact()
        .map_err(|err| prompt_error(label, err))
}

fn prompt_error(label: &str, err: DialoguerError) -> AppError {
    let details = match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => "cancelled".to_string(),
        other => other.to_string(),
    };
    AppError::Prompt { field: label.to_lowercase(), details }
}
