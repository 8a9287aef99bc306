//! Moderation service: operator actions on accounts and content.
//!
//! Every action is audit-logged with the operator label. Account
//! deletion is a bare row delete: votes, comments, and origin records
//! referencing the account survive as orphans.

use chrono::Utc;
use promovote_common::{AppError, AppResult};
use promovote_db::{
    entities::user,
    repositories::{CommentRepository, UserRepository},
};
use sea_orm::Set;
use serde::Serialize;

/// Admin overview of recent activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_accounts: u64,
    pub recent_accounts: Vec<AccountSummary>,
}

/// A trimmed account row for the overview listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_blocked: bool,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<user::Model> for AccountSummary {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            is_blocked: u.is_blocked,
            created_at: u.created_at,
        }
    }
}

/// Moderation service.
#[derive(Clone)]
pub struct ModerationService {
    user_repo: UserRepository,
    comment_repo: CommentRepository,
}

impl ModerationService {
    /// Create a new moderation service.
    #[must_use]
    pub const fn new(user_repo: UserRepository, comment_repo: CommentRepository) -> Self {
        Self {
            user_repo,
            comment_repo,
        }
    }

    /// Account totals and the most recently created accounts.
    pub async fn overview(&self, recent_limit: u64) -> AppResult<OverviewStats> {
        let total_accounts = self.user_repo.count().await?;
        let recent_accounts = self
            .user_repo
            .find_recent(recent_limit)
            .await?
            .into_iter()
            .map(AccountSummary::from)
            .collect();

        Ok(OverviewStats {
            total_accounts,
            recent_accounts,
        })
    }

    /// Block an account. Blocked accounts cannot log in or act.
    pub async fn block_user(&self, user_id: &str, operator: &str) -> AppResult<()> {
        self.set_blocked(user_id, true, operator).await
    }

    /// Unblock an account.
    pub async fn unblock_user(&self, user_id: &str, operator: &str) -> AppResult<()> {
        self.set_blocked(user_id, false, operator).await
    }

    async fn set_blocked(&self, user_id: &str, blocked: bool, operator: &str) -> AppResult<()> {
        let user = self.user_repo.get_by_id(user_id).await?;

        let mut active: user::ActiveModel = user.into();
        active.is_blocked = Set(blocked);
        active.updated_at = Set(Some(Utc::now().into()));
        self.user_repo.update(active).await?;

        tracing::info!(
            user_id = user_id,
            blocked = blocked,
            operator = operator,
            "Moderation: account block state changed"
        );
        Ok(())
    }

    /// Delete an account. The account's votes and comments are kept.
    pub async fn delete_user(&self, user_id: &str, operator: &str) -> AppResult<()> {
        // Resolve first so a bad id is a 404, not a silent no-op
        self.user_repo.get_by_id(user_id).await?;
        self.user_repo.delete_by_id(user_id).await?;

        tracing::info!(
            user_id = user_id,
            operator = operator,
            "Moderation: account deleted"
        );
        Ok(())
    }

    /// Delete any comment regardless of author.
    pub async fn delete_comment(&self, comment_id: &str, operator: &str) -> AppResult<()> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {comment_id}")))?;

        self.comment_repo.delete(comment).await?;

        tracing::info!(
            comment_id = comment_id,
            operator = operator,
            "Moderation: comment deleted"
        );
        Ok(())
    }
}
