pub mod page;
pub mod session;
pub mod store;

pub use page::{Note, Page, PageView, Toggle};
pub use session::Wizard;
pub use store::{CriterionField, FieldKey, FieldStore};
