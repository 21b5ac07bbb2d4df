//! Parsing of author-supplied tokens.
//!
//! The form of a token is decided once, at parse time:
//!
//! | text | token |
//! |---|---|
//! | `$user` | [`Token::Reference`] to the `user` memory key |
//! | `$getUser()` | [`Token::Reference`] that invokes a stored generator |
//! | `Hello {$name}` | [`Token::Template`] with one placeholder |
//! | `$jq({$price} * 2)` | [`Token::Expression`] for the host evaluator |
//! | anything else | [`Token::Literal`] |

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\$([A-Za-z_][A-Za-z0-9_]*)(\(\))?\}").unwrap());

const EXPRESSION_OPEN: &str = "$jq(";

/// A parsed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Reference(Reference),
    Template(Template),
    Expression(Template),
}

/// A memory key. `invoke` records the `()` call syntax, which requires a
/// stored generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub key: String,
    pub invoke: bool,
}

/// Text interleaved with memory references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Placeholder(Reference),
}

impl Token {
    pub fn parse(input: &str) -> Token {
        if let Some(source) = input
            .strip_prefix(EXPRESSION_OPEN)
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Token::Expression(Template::parse(source));
        }

        if let Some(reference) = Reference::parse(input) {
            return Token::Reference(reference);
        }

        let template = Template::parse(input);
        if template.has_placeholders() {
            Token::Template(template)
        } else {
            Token::Literal(input.to_string())
        }
    }
}

impl Reference {
    /// Parse `$key` or `$key()`; the whole input must match.
    pub fn parse(input: &str) -> Option<Reference> {
        let rest = input.strip_prefix('$')?;
        let (key, invoke) = match rest.strip_suffix("()") {
            Some(key) => (key, true),
            None => (rest, false),
        };
        if is_identifier(key) {
            Some(Reference {
                key: key.to_string(),
                invoke,
            })
        } else {
            None
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Template {
    pub fn parse(input: &str) -> Template {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(input) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(input[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(Reference {
                key: captures[1].to_string(),
                invoke: captures.get(2).is_some(),
            }));
            last = whole.end();
        }

        if last < input.len() {
            segments.push(Segment::Text(input[last..].to_string()));
        }

        Template { segments }
    }

    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }
}
