//! Selector query engine.
//!
//! A [`Selector`] is parsed from a jq/yq style path (`.`, `.a.b`, `.a[0]`),
//! evaluated against a parsed document and the match re-serialized with
//! [`render`].

mod error;
mod eval;
mod selector;

use serde_yaml::Value;

use crate::error::ConfError;

pub use error::QueryError;
pub use selector::{Selector, Step};

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryFormat {
    /// Same textual format as the stored document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize a query result, trimming surrounding whitespace.
///
/// In YAML format a string match is returned unquoted and untouched, the
/// way yq prints scalars, so `"8080"` renders as `8080` rather than `'8080'`.
pub fn render(value: &Value, format: QueryFormat) -> Result<String, ConfError> {
    if let (QueryFormat::Yaml, Value::String(text)) = (format, value) {
        return Ok(text.clone());
    }
    let text = match format {
        QueryFormat::Yaml => serde_yaml::to_string(value).map_err(ConfError::Serialize)?,
        QueryFormat::Json => serde_json::to_string_pretty(value).map_err(ConfError::Json)?,
    };
    Ok(text.trim().to_string())
}
