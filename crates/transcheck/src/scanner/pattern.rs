//! Placeholder matching patterns.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// The built-in placeholder pattern source.
///
/// Recognizes two placeholder families:
/// - Key-form: a colon followed by a `snake_case`, `UPPER_CASE` or `Ucfirst`
///   identifier, or a single letter. Identifiers end on a letter/digit
///   boundary, so `:up_to_here_0_not_here` matches only `:up_to_here` and
///   `:_not` does not match at all.
/// - Label-form: an open tag `<name>` whose identifier has the same shape.
///   The default pattern additionally requires the exact `</name>` close tag
///   later in the text before the open tag counts as a placeholder.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = r":(?:[A-Za-z](?:_[a-z]|[a-z0-9])+|[A-Z](?:_[A-Z]|[A-Z0-9])*|[a-z])|<(?P<label>[A-Za-z](?:_[A-Za-z]|[A-Za-z0-9])*)>";

static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_PLACEHOLDER_PATTERN).expect("default placeholder pattern is valid")
});

/// Error raised when a custom placeholder pattern fails to compile.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid placeholder pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled placeholder matching rule.
///
/// The default pattern pairs label-form open tags with their close tags;
/// custom patterns use plain regex semantics over the whole text.
///
/// # Example
///
/// ```
/// use transcheck::{PlaceholderPattern, scan};
///
/// let custom = PlaceholderPattern::new(r"(?i):[a-z_]+").unwrap();
/// let tokens = scan("custom finds :_yEs", &custom, &[]);
/// assert_eq!(tokens, vec![":_yEs"]);
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderPattern {
    regex: Regex,
    paired_labels: bool,
}

impl PlaceholderPattern {
    /// Compile a custom pattern.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            paired_labels: false,
        })
    }

    /// The pattern source string.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn paired_labels(&self) -> bool {
        self.paired_labels
    }
}

impl Default for PlaceholderPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
            paired_labels: true,
        }
    }
}
