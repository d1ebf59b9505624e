//! Component-independent logic for the showcase forms and lists.

pub mod login;
pub mod people;
