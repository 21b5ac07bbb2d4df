use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use layered_expect::{Mismatch, ValidationKind, Value};

use crate::check;

/// `/pattern/flags` literal form.
static PATTERN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^/(.*)/([a-z]*)$").unwrap());

/// Build a regex from `/pattern/flags` or from a bare pattern.
///
/// Supported flags: `i` (case insensitive), `m` (multi-line), `s` (dot matches
/// newline), `x` (ignore whitespace). `g` and `u` are accepted and ignored.
pub fn parse_pattern(source: &str) -> Result<Regex, String> {
    let Some(captures) = PATTERN_LITERAL.captures(source) else {
        return Regex::new(source).map_err(|e| e.to_string());
    };
    let (pattern, flags) = (&captures[1], &captures[2]);

    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'g' | 'u' => &mut builder,
            other => return Err(format!("unsupported regex flag '{}'", other)),
        };
    }
    builder.build().map_err(|e| e.to_string())
}

/// The display form of `actual` matches the expected pattern.
pub fn matches(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let regex = parse_pattern(&expected.to_string()).map_err(|reason| {
        Mismatch::new(format!(
            "invalid pattern {}: {}",
            expected.describe(),
            reason
        ))
    })?;
    check(
        regex.is_match(&actual.to_string()),
        actual,
        ValidationKind::Match,
        expected,
    )
}
