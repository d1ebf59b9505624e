pub mod login_form;
pub mod skills_field;

pub use login_form::*;
pub use skills_field::*;
