pub mod substitution_set;
pub mod value;

pub use substitution_set::SubstitutionSet;
pub use value::{LabelTransformFn, SubstitutionValue};
