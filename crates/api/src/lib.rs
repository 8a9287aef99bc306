//! HTTP API for promovote.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod origin;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
