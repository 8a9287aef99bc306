//! Vote endpoints.

use axum::{Json, Router, extract::State, routing::post};
use promovote_common::AppResult;
use serde::{Deserialize, Serialize};

use crate::{extractors::AuthUser, middleware::AppState, response::ApiResponse};

/// Create the votes router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(cast_vote).get(my_votes))
}

/// Cast-vote request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub item_id: i32,
}

/// Cast-vote response.
///
/// `tally` is absent when the vote was durable but the fresh count
/// could not be read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub voted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tally: Option<u64>,
}

/// Cast a ballot for a contest item.
async fn cast_vote(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CastVoteRequest>,
) -> AppResult<ApiResponse<CastVoteResponse>> {
    let outcome = state.vote_service.cast_vote(&user.id, req.item_id).await?;
    Ok(ApiResponse::ok(CastVoteResponse {
        voted: outcome.accepted,
        tally: outcome.tally,
    }))
}

/// The caller's vote history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyVotesResponse {
    pub item_ids: Vec<i32>,
}

/// List the item ids the caller has voted for.
async fn my_votes(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<MyVotesResponse>> {
    let item_ids = state.vote_service.votes_for_account(&user.id).await?;
    Ok(ApiResponse::ok(MyVotesResponse { item_ids }))
}
