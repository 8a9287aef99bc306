//! Core business logic for promovote.

pub mod services;

pub use services::*;
