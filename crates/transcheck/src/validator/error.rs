//! Error types for the validation engine.

use thiserror::Error;

/// A validation failure.
///
/// Every variant is terminal for the sequence that raised it; nothing is
/// retried or recovered internally. Variants carry the locale-resolved text
/// they were evaluated against, never just the lookup key, so a report is
/// actionable without re-running resolution. Exact human wording belongs to
/// the embedding test layer; these messages only surface the structured data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No template exists for the key and locale.
    #[error("no translation found for key '{key}' in locale '{locale}'")]
    TemplateNotFound { key: String, locale: String },

    /// Two replace keys are identical after case folding.
    #[error("replace key '{second_key}' repeats '{first_key}' after case folding")]
    KeyCollision {
        first_key: String,
        second_key: String,
    },

    /// A replace key has no placeholder occurrence in the resolved template.
    #[error(
        "replace key '{key}' has no placeholder in '{resolved_text}', expected {}",
        expected_forms.join(" or ")
    )]
    MissingPlaceholder {
        key: String,
        /// The placeholder literal forms that would have satisfied the key.
        expected_forms: Vec<String>,
        /// The catalog key the template was resolved from, when it had one.
        template_key: Option<String>,
        locale: Option<String>,
        resolved_text: String,
    },

    /// Placeholder tokens remain after all expected substitutions.
    #[error(
        "unexpected placeholders in '{resolved_text}': {}",
        tokens.join(", ")
    )]
    UnexpectedPlaceholders {
        tokens: Vec<String>,
        resolved_text: String,
    },
}
