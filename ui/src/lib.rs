//! This crate contains the shared UI components for the form and list showcase.

pub mod app;
pub use app::Showcase;

pub mod components;
pub mod config;
pub mod features;
pub mod utils;

pub use components::display::Loops;
pub use components::forms::LoginForm;
