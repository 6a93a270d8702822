//! Search-term substitution for URL templates.
//!
//! Patterns carry an optional placeholder token, `%s` or `%S`. `%s` takes
//! precedence when a pattern somehow contains both forms; whichever token is
//! selected, every occurrence of it is substituted. A pattern with no
//! placeholder is used verbatim as a literal URL.

/// Placeholder tokens in precedence order.
const PLACEHOLDERS: &[&str] = &["%s", "%S"];

/// Expand `pattern` by substituting `term` for its placeholder token.
///
/// Pure string transformation; never fails.
pub fn expand(pattern: &str, term: &str) -> String {
    for &token in PLACEHOLDERS {
        if pattern.contains(token) {
            return pattern.split(token).collect::<Vec<_>>().join(term);
        }
    }
    pattern.to_string()
}
