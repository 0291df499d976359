//! Init command handler.
//!
//! `init` is the only destructive command: it deletes the whole store
//! directory before recreating it, so an existing store is only reset after
//! confirmation or with `--force`.

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::utils::input::prompt_confirmation;

/// Execute the init command, asking on the terminal before a reset.
pub fn execute(ctx: &CliContext, soft: bool, force: bool) -> Result<()> {
    execute_with(ctx, soft, force, prompt_confirmation)
}

/// Execute the init command with an injected confirmation source.
pub fn execute_with<F>(ctx: &CliContext, soft: bool, force: bool, confirm: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let store = ctx.store();

    if soft {
        store.soft_init()?;
        eprintln!("✓ Store ready at {}", store.path().display());
        return Ok(());
    }

    if store.exists() && !force {
        let question = format!(
            "Reset {}? This deletes everything in {}",
            store.path().display(),
            store.dir_path().display()
        );
        if !confirm(&question)? {
            debug!("Init cancelled by user");
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    store.init()?;
    eprintln!("✓ Initialized {}", store.path().display());
    Ok(())
}
