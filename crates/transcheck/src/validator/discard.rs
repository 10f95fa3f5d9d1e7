//! The discard engine: proves each replace key maps to a real placeholder.
//!
//! Presence is proven by probing: a no-op substitution (empty replacement
//! text) is applied for the key, and the text must change. Keys are consumed
//! longest first so a shorter key's probe cannot spuriously match inside a
//! longer key's placeholder name, and the collision check runs per key in
//! that same order.

use crate::substitute;
use crate::types::{SubstitutionSet, SubstitutionValue};
use crate::validator::ValidationError;
use crate::validator::keys::SeenKeys;

/// Discard every placeholder addressed by `substitutions` from `template`.
///
/// Returns the residual text with the proven placeholders removed. Fails
/// with [`ValidationError::KeyCollision`] when two keys case-fold to the same
/// value, or [`ValidationError::MissingPlaceholder`] when a key's probe
/// leaves the text unchanged. `template_key` and `locale` describe where the
/// template was resolved from and are carried into the failure report;
/// validation of raw text passes `None` for both.
pub fn discard(
    template: &str,
    substitutions: &SubstitutionSet,
    template_key: Option<&str>,
    locale: Option<&str>,
) -> Result<String, ValidationError> {
    let mut residual = template.to_string();
    let mut seen = SeenKeys::new();

    for (key, value) in substitutions.iter_longest_first() {
        seen.check(key)?;

        // The probe's only purpose is to detect presence: label transforms
        // are probed with an empty-output transform, text values with empty
        // replacement text. A label value deliberately checks only the
        // label form, even when a colon-form token with the same name exists.
        let candidate = match value {
            SubstitutionValue::Text(_) => substitute::replace_colon_forms(&residual, key, ""),
            SubstitutionValue::LabelTransform(_) => {
                substitute::replace_label_spans(&residual, key, |_| String::new())
            }
        };

        if candidate == residual {
            return Err(ValidationError::MissingPlaceholder {
                key: key.to_string(),
                expected_forms: expected_forms(key, value),
                template_key: template_key.map(ToString::to_string),
                locale: locale.map(ToString::to_string),
                resolved_text: template.to_string(),
            });
        }
        residual = candidate;
    }

    Ok(residual)
}

/// The placeholder literal forms that would satisfy `key` given its value.
fn expected_forms(key: &str, value: &SubstitutionValue) -> Vec<String> {
    match value {
        SubstitutionValue::Text(_) => vec![
            format!(":{key}"),
            format!(":{}", substitute::ucfirst(key)),
            format!(":{}", key.to_uppercase()),
        ],
        SubstitutionValue::LabelTransform(_) => {
            vec![format!("<{key}>INSIDE_TEXT</{key}>")]
        }
    }
}
