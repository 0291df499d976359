//! Raw reads of the committed document.

use std::fs;
use std::io::{self, Write};

use super::ConfStore;
use crate::error::{ConfError, Result};

impl ConfStore {
    /// Full contents of the configuration file.
    ///
    /// Reads never take the write lock; commits are atomic renames, so the
    /// result is always one complete committed version.
    pub fn data(&self) -> Result<String> {
        let path = self.path();
        fs::read_to_string(&path).map_err(|e| ConfError::io(path, e))
    }

    /// Print [`data`](Self::data) to stdout followed by a line break.
    pub fn print(&self) -> Result<()> {
        self.print_to(&mut io::stdout().lock())
    }

    /// Like [`print`](Self::print) but writes to `out`.
    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let data = self.data()?;
        writeln!(out, "{data}").map_err(ConfError::Output)
    }
}
