//! Profile endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use promovote_common::AppResult;
use promovote_core::{ProfileView, UpdateProfileInput};

use crate::{
    extractors::{AuthUser, MaybeAuthUser},
    middleware::AppState,
    response::ApiResponse,
};

/// Create the profile router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_profile))
        .route("/", put(update_profile))
}

/// Fetch a profile. Contact details are masked unless the caller owns
/// the profile.
async fn get_profile(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProfileView>> {
    let viewer_id = viewer.as_ref().map(|u| u.id.as_str());
    let view = state.account_service.get_profile(&id, viewer_id).await?;
    Ok(ApiResponse::ok(view))
}

/// Update the caller's own profile.
async fn update_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileInput>,
) -> AppResult<ApiResponse<ProfileView>> {
    let view = state.account_service.update_profile(&user.id, req).await?;
    Ok(ApiResponse::ok(view))
}
