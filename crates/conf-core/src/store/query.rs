//! Selector queries against the committed document.

use std::io::{self, Write};

use serde_yaml::Value;
use tracing::warn;

use super::ConfStore;
use crate::error::{ConfError, Result};
use crate::query::{QueryFormat, Selector, render};

impl ConfStore {
    /// Parse the committed document. A blank file is an absent document.
    pub fn document(&self) -> Result<Option<Value>> {
        let data = self.data()?;
        if data.trim().is_empty() {
            return Ok(None);
        }
        serde_yaml::from_str(&data)
            .map(Some)
            .map_err(|source| ConfError::Document {
                origin: self.path().display().to_string(),
                source,
            })
    }

    /// Evaluate `selector` and return the matched value, or `None` when the
    /// path is absent from the document.
    ///
    /// The selector is parsed before the file is read, so a malformed
    /// selector is reported even when the store does not exist.
    pub fn query_value(&self, selector: &str) -> Result<Option<Value>> {
        let selector = Selector::parse(selector)?;
        let Some(document) = self.document()? else {
            return Ok(None);
        };
        Ok(selector.evaluate(&document)?.cloned())
    }

    /// Evaluate `selector` and return the match as trimmed YAML.
    ///
    /// An absent path yields an empty string, not an error.
    pub fn query(&self, selector: &str) -> Result<String> {
        self.query_as(selector, QueryFormat::Yaml)
    }

    /// [`query`](Self::query) with an explicit output format.
    pub fn query_as(&self, selector: &str, format: QueryFormat) -> Result<String> {
        match self.query_value(selector)? {
            Some(value) => render(&value, format),
            None => Ok(String::new()),
        }
    }

    /// Print the [`query`](Self::query) result to stdout.
    ///
    /// Errors are logged rather than returned so a failed lookup never halts
    /// the caller. Absent results print nothing.
    pub fn query_print(&self, selector: &str) {
        self.query_print_to(selector, &mut io::stdout().lock());
    }

    /// Like [`query_print`](Self::query_print) but writes to `out`.
    pub fn query_print_to<W: Write>(&self, selector: &str, out: &mut W) {
        match self.query(selector) {
            Ok(result) if result.is_empty() => {}
            Ok(result) => {
                if let Err(e) = writeln!(out, "{result}") {
                    warn!(selector, error = %e, "Failed to write query result");
                }
            }
            Err(e) => warn!(selector, error = %e, "Query failed"),
        }
    }
}
