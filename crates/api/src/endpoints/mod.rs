//! API endpoints.

mod admin;
mod auth;
mod comments;
mod profile;
mod videos;
mod votes;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/votes", votes::router())
        .nest("/videos", videos::router())
        .nest("/comments", comments::router())
        .nest("/profile", profile::router())
        .nest("/admin", admin::router())
}
