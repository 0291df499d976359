//! Exists command handler.

use crate::bootstrap::CliContext;

/// Print `true` or `false` and report whether the store exists.
///
/// The caller turns `false` into exit status 1 so shell scripts can write
/// `conf exists >/dev/null || conf init --soft`.
pub fn execute(ctx: &CliContext) -> bool {
    let exists = ctx.store().exists();
    println!("{exists}");
    exists
}
