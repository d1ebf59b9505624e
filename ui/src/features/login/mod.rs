//! Login form domain logic
//!
//! - **types**: draft, validated payload and reducer actions
//! - **schema**: pure draft validation producing per-field messages
//! - **state**: reducer-driven form state with submit handling
//! - **errors**: field paths and validation error types

pub mod errors;
pub mod schema;
pub mod state;
pub mod types;

pub use errors::*;
pub use schema::validate;
pub use state::LoginFormState;
pub use types::*;
