//! Selector parsing.
//!
//! Parses jq/yq style path expressions such as `.`, `.command.path`,
//! `.servers[0].host`, `.items[-1]` and `."key.with.dots"` into a list of
//! [`Step`]s. Only projection is supported: no pipes, iteration or filters.

use std::fmt;
use std::str::FromStr;

use super::error::QueryError;

/// One projection step within a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Mapping lookup, e.g. `.name` or `["name"]`
    Key(String),
    /// Sequence lookup; negative values count from the end
    Index(i64),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) if is_bare_key(key) => write!(f, ".{key}"),
            Self::Key(key) => {
                f.write_str(".\"")?;
                for c in key.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// A parsed selector. The empty step list is the root selector `.`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// The identity selector `.`.
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Parse a selector string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        Parser::new(input.trim()).parse()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Selector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.steps.first() {
            None => return f.write_str("."),
            Some(Step::Index(_)) => f.write_str(".")?,
            Some(Step::Key(_)) => {}
        }
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_key_char)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn parse(mut self) -> Result<Selector, QueryError> {
        if self.input.is_empty() {
            return Err(QueryError::Empty);
        }
        if self.peek() != Some('.') {
            return Err(QueryError::MissingLeadingDot);
        }
        if self.input == "." {
            return Ok(Selector::root());
        }

        let mut steps = Vec::new();
        while let Some(c) = self.peek() {
            let offset = self.pos;
            match c {
                '.' => {
                    self.bump();
                    match self.peek() {
                        Some('"') => steps.push(Step::Key(self.quoted()?)),
                        // `.[0]` / `.a.[0]`: the bracket step is handled next
                        Some('[') => {}
                        Some(c) if is_key_char(c) => steps.push(Step::Key(self.bare_key())),
                        Some(found) => {
                            return Err(QueryError::UnexpectedChar {
                                offset: self.pos,
                                found,
                            });
                        }
                        None => return Err(QueryError::UnexpectedEnd { offset: self.pos }),
                    }
                }
                '[' => {
                    self.bump();
                    steps.push(self.bracket()?);
                }
                found => return Err(QueryError::UnexpectedChar { offset, found }),
            }
        }

        Ok(Selector { steps })
    }

    fn bare_key(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_key_char) {
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn bracket(&mut self) -> Result<Step, QueryError> {
        let step = match self.peek() {
            Some('"') => Step::Key(self.quoted()?),
            Some(c) if c == '-' || c.is_ascii_digit() => self.index()?,
            Some(found) => {
                return Err(QueryError::UnexpectedChar {
                    offset: self.pos,
                    found,
                });
            }
            None => return Err(QueryError::UnexpectedEnd { offset: self.pos }),
        };

        let offset = self.pos;
        match self.bump() {
            Some(']') => Ok(step),
            Some(found) => Err(QueryError::UnexpectedChar { offset, found }),
            None => Err(QueryError::UnexpectedEnd { offset }),
        }
    }

    fn index(&mut self) -> Result<Step, QueryError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        text.parse::<i64>()
            .map(Step::Index)
            .map_err(|_| QueryError::InvalidIndex {
                offset: start,
                text: text.to_string(),
            })
    }

    fn quoted(&mut self) -> Result<String, QueryError> {
        let start = self.pos;
        self.bump();

        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => {
                    let offset = self.pos;
                    match self.bump() {
                        Some('"') => out.push('"'),
                        Some('\\') => out.push('\\'),
                        Some('n') => out.push('\n'),
                        Some('t') => out.push('\t'),
                        Some(found) => return Err(QueryError::UnexpectedChar { offset, found }),
                        None => return Err(QueryError::UnterminatedString { offset: start }),
                    }
                }
                Some(c) => out.push(c),
                None => return Err(QueryError::UnterminatedString { offset: start }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Step {
        Step::Key(k.to_string())
    }

    #[test]
    fn dot_is_root() {
        assert!(Selector::parse(".").unwrap().is_root());
        assert!(Selector::parse("  .\n").unwrap().is_root());
    }

    #[test]
    fn parses_nested_keys() {
        let sel = Selector::parse(".command.path").unwrap();
        assert_eq!(sel.steps(), &[key("command"), key("path")]);
    }

    #[test]
    fn parses_indices() {
        let sel = Selector::parse(".servers[0].ports[-1]").unwrap();
        assert_eq!(
            sel.steps(),
            &[key("servers"), Step::Index(0), key("ports"), Step::Index(-1)]
        );
        assert_eq!(Selector::parse(".[2]").unwrap().steps(), &[Step::Index(2)]);
        assert_eq!(
            Selector::parse(".a.[1]").unwrap().steps(),
            &[key("a"), Step::Index(1)]
        );
    }

    #[test]
    fn parses_quoted_keys() {
        let sel = Selector::parse(r#"."app.example.com".["user name"]"#).unwrap();
        assert_eq!(sel.steps(), &[key("app.example.com"), key("user name")]);

        let sel = Selector::parse(r#".["say \"hi\""]"#).unwrap();
        assert_eq!(sel.steps(), &[key("say \"hi\"")]);
    }

    #[test]
    fn keys_may_contain_dashes_and_digits() {
        let sel = Selector::parse(".log-level.v2_opts").unwrap();
        assert_eq!(sel.steps(), &[key("log-level"), key("v2_opts")]);
    }

    #[test]
    fn rejects_empty_and_undotted_input() {
        assert_eq!(Selector::parse(""), Err(QueryError::Empty));
        assert_eq!(Selector::parse("   "), Err(QueryError::Empty));
        assert_eq!(Selector::parse("some"), Err(QueryError::MissingLeadingDot));
        assert_eq!(Selector::parse("[0]"), Err(QueryError::MissingLeadingDot));
    }

    #[test]
    fn rejects_malformed_steps() {
        assert_eq!(
            Selector::parse(".a."),
            Err(QueryError::UnexpectedEnd { offset: 3 })
        );
        assert_eq!(
            Selector::parse(".a..b"),
            Err(QueryError::UnexpectedChar {
                offset: 3,
                found: '.'
            })
        );
        assert_eq!(
            Selector::parse(".a[]"),
            Err(QueryError::UnexpectedChar {
                offset: 3,
                found: ']'
            })
        );
        assert_eq!(
            Selector::parse(".a[1x]"),
            Err(QueryError::UnexpectedChar {
                offset: 4,
                found: 'x'
            })
        );
        assert_eq!(
            Selector::parse(".a[-]"),
            Err(QueryError::InvalidIndex {
                offset: 3,
                text: "-".to_string()
            })
        );
        assert_eq!(
            Selector::parse(".a[0"),
            Err(QueryError::UnexpectedEnd { offset: 4 })
        );
        assert_eq!(
            Selector::parse(r#"."open"#),
            Err(QueryError::UnterminatedString { offset: 1 })
        );
        assert!(matches!(
            Selector::parse(".a | .b"),
            Err(QueryError::UnexpectedChar { found: ' ', .. })
        ));
    }

    #[test]
    fn display_is_canonical() {
        for raw in [".", ".a.b", ".[0]", ".a[1][-2]", r#"."x.y".z"#] {
            let sel: Selector = raw.parse().unwrap();
            assert_eq!(sel.to_string(), raw);
        }
        let sel = Selector::parse(r#".["plain"]"#).unwrap();
        assert_eq!(sel.to_string(), ".plain");
    }
}
