pub mod loops;
pub mod people_list;

pub use loops::*;
pub use people_list::*;
