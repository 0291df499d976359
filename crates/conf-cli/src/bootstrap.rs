//! CLI bootstrap - the composition root.
//!
//! Turns the parsed global options into the single [`ConfStore`] handle that
//! every command handler receives. Handlers never resolve paths themselves.

use std::path::PathBuf;

use anyhow::Result;
use conf_core::paths::{default_config_dir, normalize_user_path};
use conf_core::ConfStore;
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Store identity.
    pub id: String,
    /// Base directory; `None` means the per-user configuration root.
    pub dir: Option<PathBuf>,
    /// Configuration file name.
    pub file: String,
}

impl CliConfig {
    /// Build config from parsed arguments, normalizing `--dir`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let dir = cli.dir.as_deref().map(normalize_user_path).transpose()?;
        Ok(Self {
            id: cli.id.clone(),
            dir,
            file: cli.file.clone(),
        })
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// The store every command operates on.
    pub store: ConfStore,
}

impl CliContext {
    /// Access the store.
    pub const fn store(&self) -> &ConfStore {
        &self.store
    }
}

/// Resolve the store named by `config`.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let dir = match config.dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    let store = ConfStore::new(config.id, dir, config.file);
    debug!(path = %store.path().display(), "Resolved configuration store");
    Ok(CliContext { store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[cfg(unix)]
    #[test]
    fn explicit_dir_is_used_verbatim() {
        let cli = Cli::parse_from(["conf", "--id", "app", "--dir", "/srv/conf", "path"]);
        let ctx = bootstrap(CliConfig::from_cli(&cli).unwrap()).unwrap();
        assert_eq!(
            ctx.store().path(),
            PathBuf::from("/srv/conf/app").join(conf_core::DEFAULT_FILE_NAME)
        );
    }

    #[test]
    fn relative_dir_is_made_absolute() {
        let cli = Cli::parse_from(["conf", "--dir", "rel", "path"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        let dir = config.dir.unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("rel"));
    }

    #[test]
    fn blank_dir_is_rejected() {
        let cli = Cli::parse_from(["conf", "--dir", "  ", "path"]);
        assert!(CliConfig::from_cli(&cli).is_err());
    }
}
