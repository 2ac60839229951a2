//! Placeholder rewriting for prompt bodies.
//!
//! Source templates mark substitution points with square brackets, as in
//! `[Target Audience]`, and prefix some lines with a `##` marker left over
//! from the authoring tool. Rewriting turns each bracketed span into a
//! double-brace variable reference (`{{target_audience}}`) and strips the
//! line-start markers.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a non-empty bracketed span. The character class also matches
/// newlines, so a span may wrap across lines; empty `[]` pairs never match.
static BRACKET_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid bracket span regex"));

/// Matches a `##` marker at the start of a line.
static LINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##").expect("Invalid line marker regex"));

/// Rewrite bracketed placeholders into `{{variable}}` references, then
/// strip `##` line-start markers. Empty input stays empty.
pub fn to_handlebars(text: &str) -> String {
    let replaced = BRACKET_SPAN.replace_all(text, |caps: &regex::Captures| {
        format!("{{{{{}}}}}", variable_name(&caps[1]))
    });
    LINE_MARKER.replace_all(&replaced, "").into_owned()
}

/// Normalize a bracketed span into a variable identifier.
///
/// Lowercases the span, collapses every run of characters outside
/// `[a-z0-9]` into a single underscore, and strips leading and trailing
/// underscores. A span with no usable characters comes out empty.
pub fn variable_name(span: &str) -> String {
    let mut name = String::new();
    let mut pending_separator = false;
    for c in span.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !name.is_empty() {
                name.push('_');
            }
            pending_separator = false;
            name.push(c);
        } else {
            pending_separator = true;
        }
    }
    name
}
