pub mod field_error;
pub mod validated_input;

pub use field_error::*;
pub use validated_input::*;
