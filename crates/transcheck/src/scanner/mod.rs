//! Placeholder scanning: extracts the placeholder tokens present in a text.

pub mod pattern;

use std::collections::HashSet;

pub use pattern::{DEFAULT_PLACEHOLDER_PATTERN, PatternError, PlaceholderPattern};

/// Scan `text` for placeholder tokens.
///
/// Applies `pattern` to `text`, producing all non-overlapping matches. The
/// whole match (group 0) is the token; the literal value of every other
/// captured group is removed from the token set, which lets custom patterns
/// mark sub-matches as "not a placeholder" with parentheses. Tokens are
/// deduplicated order-stable by first occurrence, and any token present in
/// `ignore` is excluded by literal equality (not case-folded).
///
/// With the default pattern, a label-form open tag `<name>` only counts when
/// the exact close tag `</name>` appears later in the text; the reported
/// token is the open-tag literal.
///
/// # Example
///
/// ```
/// use transcheck::{PlaceholderPattern, scan};
///
/// let pattern = PlaceholderPattern::default();
/// let tokens = scan(":name greets <b>:name</b>", &pattern, &[]);
/// assert_eq!(tokens, vec![":name", "<b>"]);
/// ```
pub fn scan(text: &str, pattern: &PlaceholderPattern, ignore: &[String]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut excluded: HashSet<String> = ignore.iter().cloned().collect();

    for caps in pattern.regex().captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always participates in a match");
        if pattern.paired_labels()
            && let Some(name) = caps.name("label")
        {
            let close = format!("</{}>", name.as_str());
            if !text[whole.end()..].contains(&close) {
                continue;
            }
        }
        if seen.insert(whole.as_str()) {
            tokens.push(whole.as_str().to_string());
        }
        for group in caps.iter().skip(1).flatten() {
            excluded.insert(group.as_str().to_string());
        }
    }

    tokens.retain(|token| !excluded.contains(token));
    tokens
}
