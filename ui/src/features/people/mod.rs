//! Fixed people directory and its name search.

pub mod filter;
pub mod types;

pub use filter::filter_people;
pub use types::*;
