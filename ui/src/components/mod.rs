//! User Interface Components
//!
//! Reusable Dioxus components for the showcase:
//!
//! - **forms**: the validated login form and its dynamic skills field
//! - **display**: the people search list
//! - **input**: validated inputs, field wrappers and error text

pub mod display;
pub mod forms;
pub mod input;
