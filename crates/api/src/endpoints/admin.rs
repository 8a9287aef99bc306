//! Admin override endpoints.
//!
//! Guarded by the shared operator key in the `x-admin-key` header, not
//! by account role: the admin surface is operated out-of-band from the
//! contest site itself.

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use promovote_common::{AppError, AppResult};
use promovote_core::{CatalogView, CommentView, OverviewStats};
use serde::{Deserialize, Serialize};

use crate::{middleware::AppState, response::ApiResponse};

/// Create the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .route("/", post(execute_action))
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    let provided = headers
        .get("x-admin-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if provided.is_empty() || provided != state.admin_key {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

/// Admin overview payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub stats: OverviewStats,
    pub catalog: CatalogView,
    pub recent_comments: Vec<CommentView>,
}

const OVERVIEW_LIMIT: u64 = 50;

/// Recent accounts, tallies, and comments in one view.
async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<ApiResponse<AdminOverview>> {
    require_admin(&state, &headers)?;

    let stats = state.moderation_service.overview(OVERVIEW_LIMIT).await?;
    let catalog = state.catalog_service.list_with_tallies().await?;
    let recent_comments = state.comment_service.list_recent(OVERVIEW_LIMIT).await?;

    Ok(ApiResponse::ok(AdminOverview {
        stats,
        catalog,
        recent_comments,
    }))
}

/// Admin override actions.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminAction {
    DeleteUser { user_id: String },
    BlockUser { user_id: String },
    UnblockUser { user_id: String },
    DeleteComment { comment_id: String },
    AddVote { item_id: i32 },
    RemoveVote { item_id: i32 },
}

/// Result of an admin action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActionResult {
    pub ok: bool,
    /// Updated tally for ballot adjustments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tally: Option<u64>,
}

const OPERATOR: &str = "admin-key";

/// Execute a moderation or ballot-adjustment action.
async fn execute_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(action): Json<AdminAction>,
) -> AppResult<ApiResponse<AdminActionResult>> {
    require_admin(&state, &headers)?;

    let tally = match action {
        AdminAction::DeleteUser { user_id } => {
            state.moderation_service.delete_user(&user_id, OPERATOR).await?;
            None
        }
        AdminAction::BlockUser { user_id } => {
            state.moderation_service.block_user(&user_id, OPERATOR).await?;
            None
        }
        AdminAction::UnblockUser { user_id } => {
            state
                .moderation_service
                .unblock_user(&user_id, OPERATOR)
                .await?;
            None
        }
        AdminAction::DeleteComment { comment_id } => {
            state
                .moderation_service
                .delete_comment(&comment_id, OPERATOR)
                .await?;
            None
        }
        AdminAction::AddVote { item_id } => {
            Some(state.vote_service.admin_add_vote(item_id, OPERATOR).await?)
        }
        AdminAction::RemoveVote { item_id } => Some(
            state
                .vote_service
                .admin_remove_vote(item_id, OPERATOR)
                .await?,
        ),
    };

    Ok(ApiResponse::ok(AdminActionResult { ok: true, tally }))
}
