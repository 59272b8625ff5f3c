//! CLI module for the user directory
//!
//! Every invocation builds a fresh directory from configuration and runs a
//! single command against it:
//! - `list`: all users in insertion order
//! - `login`: credential lookup
//! - `index`: users keyed by id
//! - `delete`: deletion through the configured store

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, LoggingConfig};
use crate::infrastructure::logging;

/// User Directory - in-memory user registry
#[derive(Debug, Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file, applied after config/default and config/local
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all users in insertion order
    List,

    /// Look up a user by username and password
    Login(LoginArgs),

    /// Show users keyed by id
    Index,

    /// Delete a user through the store
    Delete {
        /// Id of the user to delete
        id: i32,
    },
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

/// Load configuration, initialize logging and run the selected command
pub fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load_with(cli.config.as_deref())?;
    init_observability(&config.logging);

    let directory = crate::create_directory_with_config(&config);
    let output = commands::execute(&directory, &cli.command)?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_observability(config: &LoggingConfig) {
    logging::init_logging(config);
}
