//! CLI for the PlayFab settings toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use playfab_core::config;
use playfab_core::logging;
use playfab_core::settings::SharedSettings;
use std::path::PathBuf;

use commands::{run_init, run_resolve, run_show};

/// Top-level CLI for the PlayFab settings toolkit.
#[derive(Debug, Parser)]
#[command(name = "playfab")]
#[command(about = "PlayFab SDK settings and endpoint toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create the default settings file if it does not exist yet.
    Init,

    /// Show the effective shared settings (secret key redacted).
    Show,

    /// Resolve the fully qualified URL for an API path.
    Resolve {
        /// API path such as /Client/LoginWithCustomID.
        path: String,

        /// Query parameter in KEY=VALUE form; repeatable, order preserved.
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Title id override for this resolution only.
        #[arg(long)]
        title_id: Option<String>,

        /// Vertical (private cluster) name override.
        #[arg(long)]
        vertical_name: Option<String>,

        /// Environment URL override; a bare host or a full http(s) prefix.
        #[arg(long)]
        environment_url: Option<String>,

        /// Load shared settings from this resources directory instead of
        /// the user settings file.
        #[arg(long, value_name = "DIR")]
        resources: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Init => run_init()?,
            CliCommand::Show => {
                let settings = config::load_or_init()?;
                init_logging_with_fallback(&settings);
                tracing::debug!("loaded settings: {:?}", settings);
                run_show(&settings);
            }
            CliCommand::Resolve {
                path,
                params,
                title_id,
                vertical_name,
                environment_url,
                resources,
            } => {
                let settings = match &resources {
                    Some(dir) => config::load_from_resources(dir)?,
                    None => config::load_or_init()?,
                };
                init_logging_with_fallback(&settings);
                tracing::debug!("loaded settings: {:?}", settings);
                run_resolve(
                    &settings,
                    &path,
                    &params,
                    title_id,
                    vertical_name,
                    environment_url,
                )?;
            }
        }
        Ok(())
    }
}

fn init_logging_with_fallback(settings: &SharedSettings) {
    if logging::init_logging(settings).is_err() {
        logging::init_logging_stderr(settings);
    }
}
