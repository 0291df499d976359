//! Path and paths command handlers.
//!
//! Displays resolved paths for diagnostics and for scripts that want to
//! locate the configuration file without parsing it.

use anyhow::Result;

use conf_core::ResolvedPaths;

use crate::bootstrap::CliContext;

/// Execute the `path` command: print only the configuration file path.
pub fn execute_path(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.store().path().display());
    Ok(())
}

/// Execute the `paths` command.
///
/// Resolves and displays all paths used by the store in `key = value`
/// format. This is useful for checking that several programs sharing an
/// identity really point at the same file.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let paths = ResolvedPaths::resolve(ctx.store());
    println!("{paths}");
    Ok(())
}
