#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod paths;
pub mod query;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{ConfError, Result};
pub use query::{QueryError, QueryFormat, Selector, Step};
pub use store::{ConfStore, WriteLock};

// Re-export path utilities
pub use paths::{
    DEFAULT_FILE_NAME, DIR_MODE, FILE_MODE, PathError, ResolvedPaths, default_config_dir,
    ensure_private_dir, normalize_user_path,
};
