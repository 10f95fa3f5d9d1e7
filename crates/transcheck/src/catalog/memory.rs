//! In-memory catalog with pipe-separated pluralization-form selection.

use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogValue};
use crate::substitute;
use crate::types::SubstitutionSet;

/// An in-memory template catalog keyed by locale and translation key.
///
/// # Example
///
/// ```
/// use transcheck::{Catalog, MemoryCatalog};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add_line("en", "greeting", "Hello :name");
/// assert!(catalog.exists("greeting", "en"));
/// assert!(!catalog.exists("greeting", "es"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    /// locale -> key -> entry.
    lines: HashMap<String, HashMap<String, CatalogValue>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single entry for a locale, replacing any previous value.
    pub fn add_line(&mut self, locale: &str, key: &str, value: impl Into<CatalogValue>) {
        self.lines
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Add several entries for a locale.
    pub fn add_lines<K, V>(&mut self, locale: &str, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<CatalogValue>,
    {
        let map = self.lines.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            map.insert(key.into(), value.into());
        }
    }

    fn lookup(&self, key: &str, locale: &str) -> Option<&CatalogValue> {
        self.lines.get(locale).and_then(|map| map.get(key))
    }
}

impl Catalog for MemoryCatalog {
    fn exists(&self, key: &str, locale: &str) -> bool {
        self.lookup(key, locale).is_some()
    }

    fn resolve(&self, key: &str, locale: &str, count: Option<f64>) -> CatalogValue {
        let text = match self.lookup(key, locale) {
            Some(CatalogValue::Text(line)) => line.as_str(),
            Some(structured @ CatalogValue::List(_)) => return structured.clone(),
            // Missing keys resolve to the key text itself, so the key can
            // carry the template directly.
            None => key,
        };
        match count {
            Some(count) => CatalogValue::Text(choose(text, count)),
            None => CatalogValue::Text(text.to_string()),
        }
    }

    fn substitute(
        &self,
        template_or_key: &str,
        substitutions: &SubstitutionSet,
        locale: &str,
        count: Option<f64>,
    ) -> CatalogValue {
        match self.resolve(template_or_key, locale, count) {
            CatalogValue::Text(text) => {
                CatalogValue::Text(substitute::apply(&text, substitutions))
            }
            structured @ CatalogValue::List(_) => structured,
        }
    }
}

/// Select a pluralization form from a `|`-separated line.
///
/// Segments with an explicit `{n}` or `[a,b]` prefix are tried first; `*`
/// stands for an open bound. With no explicit match the selection falls back
/// to positional segments: the first for a count of one, otherwise the
/// second, or the first stripped segment when that index does not exist.
fn choose(line: &str, count: f64) -> String {
    let segments: Vec<&str> = line.split('|').collect();

    for segment in &segments {
        if let (Some(condition), text) = split_condition(segment)
            && condition_matches(condition, count)
        {
            return text.to_string();
        }
    }

    let stripped: Vec<&str> = segments
        .iter()
        .map(|segment| split_condition(segment).1)
        .collect();
    let index = if count == 1.0 { 0 } else { 1 };
    let selected = if stripped.len() == 1 || index >= stripped.len() {
        stripped[0]
    } else {
        stripped[index]
    };
    selected.to_string()
}

/// Split an optional `{..}` or `[..]` condition prefix off a segment.
fn split_condition(segment: &str) -> (Option<&str>, &str) {
    let closer = match segment.chars().next() {
        Some('{') => '}',
        Some('[') => ']',
        _ => return (None, segment),
    };
    match segment.find(closer) {
        Some(end) => (Some(&segment[1..end]), &segment[end + 1..]),
        None => (None, segment),
    }
}

fn condition_matches(condition: &str, count: f64) -> bool {
    match condition.split_once(',') {
        Some((from, to)) => {
            let from_ok = from.trim() == "*" || from.trim().parse::<f64>().is_ok_and(|n| count >= n);
            let to_ok = to.trim() == "*" || to.trim().parse::<f64>().is_ok_and(|n| count <= n);
            from_ok && to_ok
        }
        None => condition.trim().parse::<f64>().is_ok_and(|n| n == count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_tried_before_positional_segments() {
        let line = "[1,5]One to five|[6,*]Six or more";
        assert_eq!(choose(line, 3.0), "One to five");
        assert_eq!(choose(line, 10.0), "Six or more");
    }

    #[test]
    fn exact_counts_match_braces() {
        let line = "{0}none|{1}one|[2,*]many";
        assert_eq!(choose(line, 0.0), "none");
        assert_eq!(choose(line, 1.0), "one");
        assert_eq!(choose(line, 7.0), "many");
    }

    #[test]
    fn positional_fallback_uses_singular_and_plural() {
        let line = "Singular|Plural";
        assert_eq!(choose(line, 1.0), "Singular");
        assert_eq!(choose(line, 2.0), "Plural");
    }

    #[test]
    fn single_segment_is_used_for_any_count() {
        assert_eq!(choose("only", 1.0), "only");
        assert_eq!(choose("only", 9.0), "only");
    }
}
