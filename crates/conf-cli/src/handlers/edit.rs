//! Edit command handler.
//!
//! Hands the configuration file to the user's editor. The editor writes the
//! file directly, so edits made this way bypass the write lock.

use std::env;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// Open the configuration file in `$VISUAL`, `$EDITOR` or a platform default.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let path = ctx.store().edit_path()?;
    let editor = pick_editor(env::var("VISUAL").ok(), env::var("EDITOR").ok());
    launch(&editor, &path)
}

/// First non-blank of `visual` and `editor`, else the platform default.
pub fn pick_editor(visual: Option<String>, editor: Option<String>) -> String {
    [visual, editor]
        .into_iter()
        .flatten()
        .find(|e| !e.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Run `editor` on `path` and wait for it.
///
/// `editor` may carry arguments (`code --wait`); it is split on whitespace.
pub fn launch(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::Editor("no editor configured".to_string()))?;

    debug!(editor, path = %path.display(), "Launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| CliError::Editor(format!("failed to start {program}: {e}")))?;

    if !status.success() {
        return Err(CliError::Editor(format!("{program} exited with {status}")).into());
    }
    Ok(())
}
