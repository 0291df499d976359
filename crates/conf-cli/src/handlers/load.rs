//! Load command handler.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::bootstrap::CliContext;

/// Replace the stored document with YAML or JSON from `file` or stdin.
///
/// The input is parsed before the write lock is taken; invalid input leaves
/// the store untouched.
pub fn execute(ctx: &CliContext, file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    debug!(bytes = text.len(), "Loading document");
    ctx.store().overwrite_raw(&text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use conf_core::ConfStore;
    use tempfile::tempdir;

    fn context(dir: &Path) -> CliContext {
        CliContext {
            store: ConfStore::new("app", dir.join("stores"), "config.yaml"),
        }
    }

    #[test]
    fn loads_json_as_yaml() {
        let temp = tempdir().unwrap();
        let ctx = context(temp.path());
        let input = temp.path().join("input.json");
        fs::write(&input, r#"{"server": {"port": 8080}}"#).unwrap();

        execute(&ctx, Some(&input)).unwrap();
        assert_eq!(ctx.store().data().unwrap(), "server:\n  port: 8080\n");
    }

    #[test]
    fn invalid_input_is_a_data_error() {
        let temp = tempdir().unwrap();
        let ctx = context(temp.path());
        let input = temp.path().join("input.yaml");
        fs::write(&input, "a: [1, 2").unwrap();

        let err = execute(&ctx, Some(&input)).unwrap_err();
        assert_eq!(exit_code_for(&err), 65);
        assert!(!ctx.store().exists());
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let temp = tempdir().unwrap();
        let ctx = context(temp.path());

        let err = execute(&ctx, Some(&temp.path().join("nope.yaml"))).unwrap_err();
        assert_eq!(exit_code_for(&err), 74);
    }
}
