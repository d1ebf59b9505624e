mod showcase;

pub use showcase::Showcase;
