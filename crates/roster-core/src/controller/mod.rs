mod form;
mod list;

pub use form::{FormController, FormMode, SubmitError, Submitted};
pub use list::{ListController, LOAD_FAILED};
