//! The template catalog collaborator interface.
//!
//! The validation engine never stores templates itself; it consumes a
//! [`Catalog`] that resolves and substitutes them. [`MemoryCatalog`] is the
//! in-memory reference implementation used throughout the tests.

pub mod memory;

use std::fmt;

pub use memory::MemoryCatalog;

use crate::types::SubstitutionSet;

/// A resolved catalog entry.
///
/// Most entries are literal template text, but a catalog may also hold
/// structured values (for example a list used for a non-translatable lookup
/// table). Structured values bypass all placeholder checks.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// Literal template text.
    Text(String),

    /// A structured list value; never scanned for placeholders.
    List(Vec<String>),
}

impl CatalogValue {
    /// Get this value as literal text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CatalogValue::Text(s) => Some(s),
            CatalogValue::List(_) => None,
        }
    }

    /// Whether this value is literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, CatalogValue::Text(_))
    }
}

impl fmt::Display for CatalogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogValue::Text(s) => write!(f, "{s}"),
            CatalogValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<String> for CatalogValue {
    fn from(s: String) -> Self {
        CatalogValue::Text(s)
    }
}

impl From<&str> for CatalogValue {
    fn from(s: &str) -> Self {
        CatalogValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for CatalogValue {
    fn from(items: Vec<String>) -> Self {
        CatalogValue::List(items)
    }
}

/// The template catalog consumed by the validation engine.
///
/// `resolve` without substitutions must return the same literal placeholder
/// text that `substitute` starts from; the discard probe depends on seeing
/// the unsubstituted template.
pub trait Catalog {
    /// Whether a template exists for `key` in `locale`.
    fn exists(&self, key: &str, locale: &str) -> bool;

    /// Resolve the unsubstituted template for `key`.
    ///
    /// With a `count`, pluralization-form selection applies. A key with no
    /// catalog entry resolves to the key text itself, so arbitrary template
    /// text can be validated by passing it as the key.
    fn resolve(&self, key: &str, locale: &str, count: Option<f64>) -> CatalogValue;

    /// Resolve `template_or_key` and apply the real substitution values,
    /// including invoking label transforms with their captured inner text.
    fn substitute(
        &self,
        template_or_key: &str,
        substitutions: &SubstitutionSet,
        locale: &str,
        count: Option<f64>,
    ) -> CatalogValue;
}
