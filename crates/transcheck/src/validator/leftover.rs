//! The leftover check: no stray placeholder tokens may remain.

use crate::scanner::{PlaceholderPattern, scan};
use crate::validator::ValidationError;

/// Fail with [`ValidationError::UnexpectedPlaceholders`] when `text` still
/// contains placeholder tokens not covered by `ignore`.
///
/// Runs against the discard residual when validating a replacement set, or
/// against arbitrary text for a standalone "no placeholders" check.
pub fn check_none(
    text: &str,
    ignore: &[String],
    pattern: &PlaceholderPattern,
) -> Result<(), ValidationError> {
    let tokens = scan(text, pattern, ignore);
    if tokens.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedPlaceholders {
            tokens,
            resolved_text: text.to_string(),
        })
    }
}
