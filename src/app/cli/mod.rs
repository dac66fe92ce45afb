//! CLI Adapter.

mod job;
mod manifest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::HostingMode;
use crate::app::logging::init_logging;
use crate::domain::{AppError, Tool};
use crate::domain::configuration::SERVER_ENV;

#[derive(Parser)]
#[command(name = "transfer-panel")]
#[command(version)]
#[command(
    about = "Configure and launch rsync/rclone transfer jobs on a host execution server",
    long_about = None
)]
struct Cli {
    /// Path to a transfer-panel.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the server exposing /rsync/run and /rclone/run
    #[arg(long, global = true, env = SERVER_ENV)]
    server: Option<String>,
    /// How the panel is hosted
    #[arg(long, global = true, value_enum, default_value_t = HostingMode::Modal)]
    mode: HostingMode,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror files with rsync
    #[clap(visible_alias = "rs")]
    Rsync(job::JobArgs),
    /// Transfer files with rclone
    #[clap(visible_alias = "rc")]
    Rclone {
        #[command(flatten)]
        job: job::JobArgs,
        /// Path to rclone.conf
        #[arg(long)]
        config_path: Option<String>,
    },
    /// Print the host extension manifest as JSON
    Manifest,
}

/// Settings shared by every subcommand.
pub(crate) struct GlobalOptions {
    pub(crate) config: Option<PathBuf>,
    pub(crate) server: Option<String>,
    pub(crate) mode: HostingMode,
}

/// Entry point for the CLI.
pub async fn run() {
    let Cli { config, server, mode, verbose, command } = Cli::parse();

    if let Err(e) = init_logging(verbose) {
        eprintln!("Warning: {}", e);
    }

    let globals = GlobalOptions { config, server, mode };
    let result: Result<i32, AppError> = match command {
        Commands::Rsync(args) => job::run_job(&globals, Tool::Rsync, args, None).await,
        Commands::Rclone { job: args, config_path } => {
            job::run_job(&globals, Tool::Rclone, args, config_path).await
        }
        Commands::Manifest => manifest::run_manifest().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
