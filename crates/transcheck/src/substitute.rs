//! Substitution primitives shared by the discard probe and the catalog.
//!
//! Both the no-op discard probe and the real substitution must agree on what
//! counts as a placeholder occurrence, so the string rewriting lives here and
//! is used by both sides.

use crate::types::{LabelTransformFn, SubstitutionSet, SubstitutionValue};

/// Uppercase the first character of `s`, leaving the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace every colon-form occurrence of `key` with `value`.
///
/// The three accepted literal forms are `:key` (value as given), `:Key`
/// (value ucfirst'd) and `:KEY` (value uppercased). Mixed-case spellings of
/// the key are not placeholder forms and are left alone.
pub fn replace_colon_forms(text: &str, key: &str, value: &str) -> String {
    let replaced = text.replace(&format!(":{key}"), value);
    let replaced = replaced.replace(&format!(":{}", ucfirst(key)), &ucfirst(value));
    replaced.replace(&format!(":{}", key.to_uppercase()), &value.to_uppercase())
}

/// Replace every `<key>inner</key>` span with `transform(inner)`.
///
/// Pairing is shortest-span: each open tag pairs with the first exact close
/// tag that follows it. An open tag without a close tag is left untouched.
pub fn replace_label_spans(text: &str, key: &str, transform: LabelTransformFn) -> String {
    let open = format!("<{key}>");
    let close = format!("</{key}>");
    let mut out = String::new();
    let mut rest = text;

    while let Some(start) = rest.find(&open) {
        let after_open = start + open.len();
        let Some(close_at) = rest[after_open..].find(&close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&transform(&rest[after_open..after_open + close_at]));
        rest = &rest[after_open + close_at + close.len()..];
    }

    out.push_str(rest);
    out
}

/// Apply a full substitution set to `text`, longest key first.
pub fn apply(text: &str, substitutions: &SubstitutionSet) -> String {
    let mut out = text.to_string();
    for (key, value) in substitutions.iter_longest_first() {
        out = match value {
            SubstitutionValue::Text(v) => replace_colon_forms(&out, key, v),
            SubstitutionValue::LabelTransform(f) => replace_label_spans(&out, key, *f),
        };
    }
    out
}
