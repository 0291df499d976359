//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Operations on the configuration store named by the global options.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the store, resetting it if it already exists
    Init {
        /// Only create the store if it does not exist yet
        #[arg(long)]
        soft: bool,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the stored document
    #[command(visible_alias = "print")]
    Data,

    /// Open the document in $VISUAL or $EDITOR
    Edit,

    /// Print the part of the document matched by a selector
    Query {
        /// Selector such as `.`, `.server.port` or `.hosts[0]`
        selector: String,
        /// Print the result as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Replace the document with YAML or JSON read from a file or stdin
    Load {
        /// Input file; omit or pass `-` to read stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the configuration file path
    Path,

    /// Show every resolved path for this store
    Paths,

    /// Print whether the store exists (exit status 1 if not)
    Exists,
}
