//! CLI entry point - the composition root.
//!
//! Parses arguments, resolves the store once via bootstrap and routes to a
//! handler. Errors are printed to stderr and mapped to a sysexits-style
//! exit status.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use conf_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    // --verbose overrides RUST_LOG; otherwise default to warnings only
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = CliConfig::from_cli(cli)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Init { soft, force } => handlers::init::execute(&ctx, *soft, *force)?,
        Commands::Data => handlers::data::execute(&ctx)?,
        Commands::Edit => handlers::edit::execute(&ctx)?,
        Commands::Query { selector, json } => handlers::query::execute(&ctx, selector, *json)?,
        Commands::Load { input } => handlers::load::execute(&ctx, input.as_deref())?,
        Commands::Path => handlers::paths::execute_path(&ctx)?,
        Commands::Paths => handlers::paths::execute(&ctx)?,
        Commands::Exists => {
            if !handlers::exists::execute(&ctx) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Load environment variables before parsing so CONF_* can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
