//! Contest catalog endpoints.

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use promovote_common::AppResult;
use promovote_core::{CatalogView, ItemWithTally};

use crate::{middleware::AppState, response::ApiResponse};

/// Create the videos router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos))
        .route("/{id}", get(get_video))
}

/// List all contest videos with tallies. Public; never fails on tally
/// trouble, the listing degrades to zero counts instead.
async fn list_videos(State(state): State<AppState>) -> AppResult<ApiResponse<CatalogView>> {
    let view = state.catalog_service.list_with_tallies().await?;
    Ok(ApiResponse::ok(view))
}

/// A single contest video with its tally.
async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<ItemWithTally>> {
    let item = state.catalog_service.get_with_tally(id).await?;
    Ok(ApiResponse::ok(item))
}
