//! Data command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the stored document verbatim.
pub fn execute(ctx: &CliContext) -> Result<()> {
    ctx.store().print()?;
    Ok(())
}
