//! Command handlers that delegate to the store.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `ConfStore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT resolve paths, take locks, or parse selectors
//! themselves.

pub mod data;
pub mod edit;
pub mod exists;
pub mod init;
pub mod load;
pub mod paths;
pub mod query;
