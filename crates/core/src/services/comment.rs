//! Comment service.

use chrono::Utc;
use promovote_common::{AppError, AppResult, IdGenerator};
use promovote_db::{
    entities::comment,
    repositories::{CommentRepository, ContestItemRepository, UserRepository},
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// New comment payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    pub item_id: i32,
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

/// A comment joined with its author's display name.
///
/// Authors may no longer exist: account deletion leaves comments in
/// place, so the name falls back to a placeholder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub item_id: i32,
    pub user_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

const DELETED_AUTHOR: &str = "Deleted User";

/// Comment service.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    user_repo: UserRepository,
    item_repo: ContestItemRepository,
    id_gen: IdGenerator,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(
        comment_repo: CommentRepository,
        user_repo: UserRepository,
        item_repo: ContestItemRepository,
    ) -> Self {
        Self {
            comment_repo,
            user_repo,
            item_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Post a comment on a contest item.
    pub async fn add(&self, user_id: &str, input: NewComment) -> AppResult<comment::Model> {
        input.validate()?;

        self.item_repo.get_by_id(input.item_id).await?;

        let model = comment::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(user_id.to_string()),
            item_id: Set(input.item_id),
            content: Set(input.content.trim().to_string()),
            created_at: Set(Utc::now().into()),
        };

        self.comment_repo.create(model).await
    }

    /// List comments for an item, newest first, with author names.
    pub async fn list_for_item(&self, item_id: i32) -> AppResult<Vec<CommentView>> {
        let comments = self.comment_repo.find_by_item(item_id).await?;
        self.with_authors(comments).await
    }

    /// Most recent comments across all items (admin overview).
    pub async fn list_recent(&self, limit: u64) -> AppResult<Vec<CommentView>> {
        let comments = self.comment_repo.find_recent(limit).await?;
        self.with_authors(comments).await
    }

    /// Delete a comment. Allowed for its author and for admins.
    pub async fn delete(&self, comment_id: &str, actor_id: &str, actor_is_admin: bool) -> AppResult<()> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {comment_id}")))?;

        if comment.user_id != actor_id && !actor_is_admin {
            return Err(AppError::Forbidden(
                "You can only delete your own comments".to_string(),
            ));
        }

        self.comment_repo.delete(comment).await
    }

    async fn with_authors(&self, comments: Vec<comment::Model>) -> AppResult<Vec<CommentView>> {
        let mut author_ids: Vec<String> = comments.iter().map(|c| c.user_id.clone()).collect();
        author_ids.sort();
        author_ids.dedup();

        let names: HashMap<String, String> = self
            .user_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(comments
            .into_iter()
            .map(|c| {
                let author_name = names
                    .get(&c.user_id)
                    .cloned()
                    .unwrap_or_else(|| DELETED_AUTHOR.to_string());
                CommentView {
                    id: c.id,
                    item_id: c.item_id,
                    user_id: c.user_id,
                    author_name,
                    content: c.content,
                    created_at: c.created_at,
                }
            })
            .collect())
    }
}
