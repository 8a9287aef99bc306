//! Authentication endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use promovote_common::AppResult;
use promovote_core::{AuthSession, LoginInput, SignupInput};

use crate::{
    middleware::AppState,
    origin::{origin_key, user_agent},
    response::ApiResponse,
};

/// Create the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Register a new account.
async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SignupInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthSession>>)> {
    let session = state
        .account_service
        .signup(req, &origin_key(&headers), &user_agent(&headers))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(session))))
}

/// Log in to an existing account.
async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginInput>,
) -> AppResult<ApiResponse<AuthSession>> {
    let session = state
        .account_service
        .login(req, &origin_key(&headers), &user_agent(&headers))
        .await?;

    Ok(ApiResponse::ok(session))
}
