//! Comment endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use promovote_common::AppResult;
use promovote_core::{CommentView, NewComment};
use promovote_db::entities::comment;

use crate::{extractors::AuthUser, middleware::AppState, response::ApiResponse};

/// Create the comments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_comment))
        .route("/item/{item_id}", get(list_comments))
        .route("/{id}", delete(delete_comment))
}

/// Post a comment on a contest item.
async fn add_comment(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<NewComment>,
) -> AppResult<ApiResponse<comment::Model>> {
    let created = state.comment_service.add(&user.id, req).await?;
    Ok(ApiResponse::ok(created))
}

/// List comments for an item, newest first.
async fn list_comments(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> AppResult<ApiResponse<Vec<CommentView>>> {
    let comments = state.comment_service.list_for_item(item_id).await?;
    Ok(ApiResponse::ok(comments))
}

/// Delete a comment. Authors may delete their own; admins any.
async fn delete_comment(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl axum::response::IntoResponse> {
    let is_admin = user.role == "admin";
    state.comment_service.delete(&id, &user.id, is_admin).await?;
    Ok(crate::response::ok())
}
