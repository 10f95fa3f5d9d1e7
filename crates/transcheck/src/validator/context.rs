//! The validating context: session state plus the end-to-end contract.
//!
//! A `ValidationContext` composes the scanner, discard engine and leftover
//! check over a [`Catalog`] collaborator. The full sequence runs existence
//! check, then discard (collision check interleaved per key), then the
//! leftover check, then returns the fully substituted resolution; the first
//! failure aborts the sequence and no partial result is exposed.

use bon::Builder;

use crate::catalog::{Catalog, CatalogValue};
use crate::scanner::{PatternError, PlaceholderPattern};
use crate::types::SubstitutionSet;
use crate::validator::ValidationError;
use crate::validator::discard::discard;
use crate::validator::leftover::check_none;

/// Session-scoped validation state over a template catalog.
///
/// The context owns two pieces of mutable session state: the default
/// placeholder pattern and the default ignore set. Both can be overridden
/// per call without persistent effect. The engine performs no locking;
/// concurrent hosts must give each validation sequence its own context.
///
/// # Example
///
/// ```
/// use transcheck::{MemoryCatalog, ValidationContext, substitutions};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add_line("en", "greeting", "Hello :name");
///
/// let ctx = ValidationContext::new(catalog);
/// let resolved = ctx
///     .resolve_validated("greeting", &substitutions! { "name" => "Alice" }, None, None, None, None)
///     .unwrap();
/// assert_eq!(resolved.as_text(), Some("Hello Alice"));
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct ValidationContext<C: Catalog> {
    /// The template catalog collaborator.
    catalog: C,

    /// Current locale used when a call passes no explicit locale.
    #[builder(default = "en".to_string())]
    locale: String,

    /// Session default placeholder pattern.
    #[builder(skip)]
    default_pattern: PlaceholderPattern,

    /// The original default pattern, captured once on first override.
    /// Repeated overrides do not change what "original" means.
    #[builder(skip)]
    original_pattern: Option<PlaceholderPattern>,

    /// Session default ignore set for the leftover check.
    #[builder(skip)]
    default_ignore: Vec<String>,
}

impl<C: Catalog> ValidationContext<C> {
    /// Create a context over `catalog` with default settings (locale "en").
    pub fn new(catalog: C) -> Self {
        Self::builder().catalog(catalog).build()
    }

    // =========================================================================
    // Session State
    // =========================================================================

    /// Get the current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the current locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Get the catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get the catalog collaborator mutably, e.g. to add templates.
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Get the session default placeholder pattern.
    pub fn default_pattern(&self) -> &PlaceholderPattern {
        &self.default_pattern
    }

    /// Set the session default placeholder pattern from a pattern string.
    ///
    /// The built-in default is captured as the "original" pattern the first
    /// time this is called, so [`Self::reset_default_pattern`] can restore it
    /// even after several overrides in succession.
    pub fn set_default_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        let compiled = PlaceholderPattern::new(pattern)?;
        if self.original_pattern.is_none() {
            self.original_pattern = Some(self.default_pattern.clone());
        }
        self.default_pattern = compiled;
        Ok(())
    }

    /// Restore the original default pattern. No-op if never overridden.
    pub fn reset_default_pattern(&mut self) {
        if let Some(original) = &self.original_pattern {
            self.default_pattern = original.clone();
        }
    }

    /// Get the session default ignore set.
    pub fn default_ignore(&self) -> &[String] {
        &self.default_ignore
    }

    /// Set the session default ignore set.
    pub fn set_default_ignore<I, S>(&mut self, ignore: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_ignore = ignore.into_iter().map(Into::into).collect();
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    /// Assert a template exists for `key`, returning the key back on success.
    pub fn assert_translation_exists<'k>(
        &self,
        key: &'k str,
        locale: Option<&str>,
    ) -> Result<&'k str, ValidationError> {
        let locale = locale.unwrap_or(&self.locale);
        if self.catalog.exists(key, locale) {
            Ok(key)
        } else {
            Err(ValidationError::TemplateNotFound {
                key: key.to_string(),
                locale: locale.to_string(),
            })
        }
    }

    /// Assert every replace key exists as a placeholder in the resolved
    /// template, then return the substituted resolution.
    ///
    /// Existence of the key is not required: a missing key resolves to the
    /// key text itself, so arbitrary template text can be validated directly.
    /// A structured (non-text) resolution skips all checks and is returned
    /// substituted.
    pub fn assert_keys_are_placeholders(
        &self,
        key: &str,
        substitutions: &SubstitutionSet,
        locale: Option<&str>,
        count: Option<f64>,
    ) -> Result<CatalogValue, ValidationError> {
        let locale = locale.unwrap_or(&self.locale);
        let _ = self.discarded_residual(key, substitutions, locale, count)?;
        Ok(self.catalog.substitute(key, substitutions, locale, count))
    }

    /// Assert `value` contains no placeholder tokens, returning it back.
    ///
    /// Non-text values pass through unchecked. `ignore` and `pattern` resolve
    /// from the explicit per-call argument first, else the session default.
    pub fn assert_no_placeholders(
        &self,
        value: impl Into<CatalogValue>,
        ignore: Option<&[String]>,
        pattern: Option<&PlaceholderPattern>,
    ) -> Result<CatalogValue, ValidationError> {
        let value = value.into();
        let CatalogValue::Text(text) = &value else {
            return Ok(value);
        };
        check_none(
            text,
            ignore.unwrap_or(&self.default_ignore),
            pattern.unwrap_or(&self.default_pattern),
        )?;
        Ok(value)
    }

    /// The full orchestrated sequence.
    ///
    /// Confirms a template exists for `key`, proves every replace key maps to
    /// a placeholder in the unsubstituted resolution, confirms no stray
    /// placeholders remain in the residual, and returns the fully substituted
    /// resolution. A structured (non-text) resolution short-circuits straight
    /// to the substituted value with zero placeholder checks. A leftover
    /// failure reports the unsubstituted resolved template, not the residual.
    pub fn resolve_validated(
        &self,
        key: &str,
        substitutions: &SubstitutionSet,
        locale: Option<&str>,
        count: Option<f64>,
        ignore: Option<&[String]>,
        pattern: Option<&PlaceholderPattern>,
    ) -> Result<CatalogValue, ValidationError> {
        let locale = locale.unwrap_or(&self.locale);
        self.assert_translation_exists(key, Some(locale))?;

        let Some((before, residual)) =
            self.discarded_residual(key, substitutions, locale, count)?
        else {
            return Ok(self.catalog.substitute(key, substitutions, locale, count));
        };

        let result = check_none(
            &residual,
            ignore.unwrap_or(&self.default_ignore),
            pattern.unwrap_or(&self.default_pattern),
        );
        match result {
            Ok(()) => {}
            Err(ValidationError::UnexpectedPlaceholders { tokens, .. }) => {
                return Err(ValidationError::UnexpectedPlaceholders {
                    tokens,
                    resolved_text: before,
                });
            }
            Err(other) => return Err(other),
        }

        Ok(self.catalog.substitute(key, substitutions, locale, count))
    }

    /// Resolve the unsubstituted template and run the discard engine over it.
    ///
    /// Returns `None` for a structured resolution (placeholder checks do not
    /// apply), otherwise the resolved text and the discard residual.
    fn discarded_residual(
        &self,
        key: &str,
        substitutions: &SubstitutionSet,
        locale: &str,
        count: Option<f64>,
    ) -> Result<Option<(String, String)>, ValidationError> {
        let before = self.catalog.resolve(key, locale, count);
        let CatalogValue::Text(before) = before else {
            return Ok(None);
        };

        // When the key resolved to itself the template has no catalog
        // context worth reporting.
        let template_key = (before != key).then_some(key);
        let residual = discard(
            &before,
            substitutions,
            template_key,
            template_key.map(|_| locale),
        )?;
        Ok(Some((before, residual)))
    }
}
