//! Query command handler.

use anyhow::Result;

use conf_core::QueryFormat;

use crate::bootstrap::CliContext;

/// Print the sub-document matched by `selector`.
///
/// Absent paths print nothing and succeed. Selector and storage errors are
/// returned so they reach the exit status, unlike `ConfStore::query_print`.
pub fn execute(ctx: &CliContext, selector: &str, json: bool) -> Result<()> {
    let format = if json {
        QueryFormat::Json
    } else {
        QueryFormat::Yaml
    };

    let result = ctx.store().query_as(selector, format)?;
    if !result.is_empty() {
        println!("{result}");
    }
    Ok(())
}
