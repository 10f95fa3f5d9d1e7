/// A label-transform function: receives the text captured between a
/// `<key>...</key>` placeholder pair and returns the replacement text.
pub type LabelTransformFn = fn(&str) -> String;

/// A substitution value supplied for one replace key.
///
/// The value's shape decides which placeholder family the key is expected to
/// appear in: plain text values pair with colon-form placeholders (`:key`,
/// `:Key`, `:KEY`), label transforms pair with `<key>...</key>` spans.
///
/// # Example
///
/// ```
/// use transcheck::SubstitutionValue;
///
/// let text: SubstitutionValue = "Alice".into();
/// assert_eq!(text.as_text(), Some("Alice"));
///
/// let label = SubstitutionValue::label(|inner| format!("<b>{inner}</b>"));
/// assert!(label.is_label_transform());
/// ```
#[derive(Debug, Clone)]
pub enum SubstitutionValue {
    /// Plain replacement text for a colon-form placeholder.
    Text(String),

    /// A transform applied to the inner text of a label-form placeholder.
    LabelTransform(LabelTransformFn),
}

impl SubstitutionValue {
    /// Create a label-transform value.
    pub fn label(transform: LabelTransformFn) -> Self {
        SubstitutionValue::LabelTransform(transform)
    }

    /// Get this value as replacement text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubstitutionValue::Text(s) => Some(s),
            SubstitutionValue::LabelTransform(_) => None,
        }
    }

    /// Check whether this value is a label transform.
    pub fn is_label_transform(&self) -> bool {
        matches!(self, SubstitutionValue::LabelTransform(_))
    }
}

impl From<String> for SubstitutionValue {
    fn from(s: String) -> Self {
        SubstitutionValue::Text(s)
    }
}

impl From<&str> for SubstitutionValue {
    fn from(s: &str) -> Self {
        SubstitutionValue::Text(s.to_string())
    }
}

impl From<LabelTransformFn> for SubstitutionValue {
    fn from(transform: LabelTransformFn) -> Self {
        SubstitutionValue::LabelTransform(transform)
    }
}
