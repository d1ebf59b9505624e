//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros for browser console output
//! - **serialization**: JSON and JS-object conversion for logged payloads
//! - **validation**: email shape checks and invalid-field styling

pub mod console_macros;
pub mod serialization;
pub mod validation;

pub use serialization::*;
pub use validation::*;
