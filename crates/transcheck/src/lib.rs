pub mod catalog;
pub mod scanner;
pub mod substitute;
pub mod types;
pub mod validator;

pub use catalog::{Catalog, CatalogValue, MemoryCatalog};
pub use scanner::{DEFAULT_PLACEHOLDER_PATTERN, PatternError, PlaceholderPattern, scan};
pub use types::{LabelTransformFn, SubstitutionSet, SubstitutionValue};
pub use validator::{ValidationContext, ValidationError, check_none, discard};

/// Creates a [`SubstitutionSet`] from key-value pairs.
///
/// Values are converted via `Into<SubstitutionValue>`, so plain string values
/// can be passed directly. Label transforms go through
/// [`SubstitutionValue::label`] or an explicitly typed fn pointer.
///
/// # Example
///
/// ```
/// use transcheck::substitutions;
///
/// let set = substitutions! { "name" => "Alice", "count" => "3" };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! substitutions {
    {} => {
        $crate::SubstitutionSet::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut set = $crate::SubstitutionSet::new();
            $(
                set.insert($key, ::std::convert::Into::<$crate::SubstitutionValue>::into($value));
            )+
            set
        }
    };
}
