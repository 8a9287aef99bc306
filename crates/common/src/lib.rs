//! Common utilities and shared types for promovote.
//!
//! This crate provides foundational components used across all promovote
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//! - **Session tokens**: Signed identity claims via [`TokenService`]
//! - **Retry**: Bounded backoff for transient storage failures via
//!   [`with_retry`]

pub mod config;
pub mod error;
pub mod id;
pub mod retry;
pub mod token;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
pub use retry::{RetryConfig, with_retry};
pub use token::{Claims, TokenService};
