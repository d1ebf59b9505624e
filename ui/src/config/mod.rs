//! Configuration for form behaviour.
//!
//! Components take a [`FormConfig`] prop; nothing is read from the
//! environment or from storage.

mod form_config;

pub use form_config::*;
