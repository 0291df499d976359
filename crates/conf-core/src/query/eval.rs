//! Selector evaluation against an untyped YAML document.

use serde_yaml::{Mapping, Value};

use super::error::QueryError;
use super::selector::{Selector, Step};

impl Selector {
    /// Project `document` through this selector.
    ///
    /// Returns `Ok(None)` when a key is absent, an index is out of range or
    /// an intermediate value is `null`. Indexing a scalar, a mapping by
    /// number or a sequence by key is a [`QueryError::TypeMismatch`].
    pub fn evaluate<'v>(&self, document: &'v Value) -> Result<Option<&'v Value>, QueryError> {
        let mut current = document;
        for step in self.steps() {
            current = untag(current);
            let next = match (step, current) {
                (_, Value::Null) => None,
                (Step::Key(key), Value::Mapping(map)) => lookup_key(map, key),
                (Step::Index(index), Value::Sequence(seq)) => {
                    resolve_index(seq.len(), *index).map(|i| &seq[i])
                }
                (step, other) => {
                    return Err(QueryError::TypeMismatch {
                        step: step.to_string(),
                        found: kind_name(other),
                    });
                }
            };
            match next {
                Some(value) => current = value,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// String keys first, then scalar keys by their textual form (`1:` or `true:`).
fn lookup_key<'v>(map: &'v Mapping, key: &str) -> Option<&'v Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| match k {
                Value::Number(n) => n.to_string() == key,
                Value::Bool(b) => b.to_string() == key,
                _ => false,
            })
            .map(|(_, v)| v)
    })
}

fn resolve_index(len: usize, index: i64) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok().filter(|&i| i < len)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Value {
        serde_yaml::from_str(
            "some: thing\n\
             here: goes\n\
             command:\n  path: /here/we/go\n\
             servers:\n  - host: a\n  - host: b\n\
             empty: null\n\
             1: one\n",
        )
        .unwrap()
    }

    fn eval(doc: &Value, sel: &str) -> Result<Option<Value>, QueryError> {
        Ok(Selector::parse(sel)?.evaluate(doc)?.cloned())
    }

    #[test]
    fn root_returns_whole_document() {
        let doc = doc();
        assert_eq!(eval(&doc, ".").unwrap(), Some(doc.clone()));
    }

    #[test]
    fn nested_keys_and_indices() {
        let doc = doc();
        assert_eq!(
            eval(&doc, ".command.path").unwrap(),
            Some(Value::from("/here/we/go"))
        );
        assert_eq!(eval(&doc, ".servers[1].host").unwrap(), Some(Value::from("b")));
        assert_eq!(eval(&doc, ".servers[-2].host").unwrap(), Some(Value::from("a")));
    }

    #[test]
    fn absent_paths_are_none() {
        let doc = doc();
        assert_eq!(eval(&doc, ".missing").unwrap(), None);
        assert_eq!(eval(&doc, ".missing.deeper").unwrap(), None);
        assert_eq!(eval(&doc, ".servers[5]").unwrap(), None);
        assert_eq!(eval(&doc, ".servers[-3]").unwrap(), None);
        assert_eq!(eval(&doc, ".empty.anything").unwrap(), None);
    }

    #[test]
    fn explicit_null_is_present() {
        assert_eq!(eval(&doc(), ".empty").unwrap(), Some(Value::Null));
    }

    #[test]
    fn numeric_mapping_keys_match_by_text() {
        assert_eq!(eval(&doc(), ".1").unwrap(), Some(Value::from("one")));
    }

    #[test]
    fn indexing_scalars_is_a_type_mismatch() {
        let doc = doc();
        assert_eq!(
            eval(&doc, ".some.deeper"),
            Err(QueryError::TypeMismatch {
                step: ".deeper".to_string(),
                found: "string"
            })
        );
        assert!(matches!(
            eval(&doc, ".command[0]"),
            Err(QueryError::TypeMismatch { found: "mapping", .. })
        ));
        assert!(matches!(
            eval(&doc, ".servers.host"),
            Err(QueryError::TypeMismatch { found: "sequence", .. })
        ));
    }

    #[test]
    fn tags_are_transparent_to_lookups() {
        let doc: Value = serde_yaml::from_str("secret: !vault\n  key: abc\n").unwrap();
        assert_eq!(eval(&doc, ".secret.key").unwrap(), Some(Value::from("abc")));
    }

    #[test]
    fn resolve_index_bounds() {
        assert_eq!(resolve_index(3, 0), Some(0));
        assert_eq!(resolve_index(3, 2), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(3, -1), Some(2));
        assert_eq!(resolve_index(3, -3), Some(0));
        assert_eq!(resolve_index(3, -4), None);
        assert_eq!(resolve_index(0, i64::MIN), None);
    }
}
