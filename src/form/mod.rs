mod field;
mod model;
mod rules;

pub use field::{FieldName, FormValues, Framework};
pub use model::{FormModel, NewsletterForm};
pub use rules::FieldRules;
