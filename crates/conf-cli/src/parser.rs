//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Each
//! option can also be supplied through the environment (or a `.env` file).

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for a multi-process-safe configuration store.
///
/// The global options name the store; every subcommand operates on it.
#[derive(Parser)]
#[command(name = "conf")]
#[command(about = "Read, query and replace a shared YAML configuration document")]
#[command(version)]
pub struct Cli {
    /// Store identity, usually the application name
    #[arg(long, env = "CONF_ID", default_value = "conf", global = true)]
    pub id: String,

    /// Base directory holding store directories [default: user config dir]
    #[arg(long, env = "CONF_DIR", global = true)]
    pub dir: Option<String>,

    /// Configuration file name inside the store directory
    #[arg(long, env = "CONF_FILE", default_value = conf_core::DEFAULT_FILE_NAME, global = true)]
    pub file: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
