//! Vote service: ballot casting and admin ledger overrides.
//!
//! At-most-once is enforced by the storage unique index on
//! `(user_id, item_id)`, not by any pre-check in this layer. The insert
//! goes straight to the ledger and the index verdict decides.

use chrono::Utc;
use promovote_common::{AppError, AppResult, IdGenerator, RetryConfig, with_retry};
use promovote_db::{
    entities::vote,
    repositories::{ContestItemRepository, VoteInsert, VoteRepository},
};
use sea_orm::Set;
use serde::Serialize;

/// Result of a successful ballot cast.
#[derive(Debug, Clone, Serialize)]
pub struct VoteOutcome {
    /// The vote is durable in the ledger.
    pub accepted: bool,
    /// Fresh tally for the item. `None` when the post-insert count
    /// failed: the vote is still durable and is reported as accepted.
    pub tally: Option<u64>,
}

/// Vote service.
#[derive(Clone)]
pub struct VoteService {
    vote_repo: VoteRepository,
    item_repo: ContestItemRepository,
    retry: RetryConfig,
    id_gen: IdGenerator,
}

impl VoteService {
    /// Create a new vote service.
    #[must_use]
    pub const fn new(
        vote_repo: VoteRepository,
        item_repo: ContestItemRepository,
        retry: RetryConfig,
    ) -> Self {
        Self {
            vote_repo,
            item_repo,
            retry,
            id_gen: IdGenerator::new(),
        }
    }

    /// Cast a ballot for a contest item on behalf of an account.
    ///
    /// Transient storage failures are retried; a duplicate verdict from
    /// the unique index is final on the first attempt and surfaces as
    /// `AlreadyVoted` carrying the live tally.
    pub async fn cast_vote(&self, user_id: &str, item_id: i32) -> AppResult<VoteOutcome> {
        self.item_repo.get_by_id(item_id).await?;

        let insert = with_retry(&self.retry, || {
            let model = vote::ActiveModel {
                id: Set(self.id_gen.generate()),
                user_id: Set(user_id.to_string()),
                item_id: Set(item_id),
                created_at: Set(Utc::now().into()),
            };
            self.vote_repo.insert(model)
        })
        .await?;

        match insert {
            VoteInsert::Inserted(_) => {
                tracing::info!(user_id = user_id, item_id = item_id, "Vote recorded");

                // The vote is durable; a failed tally read must not
                // turn an accepted ballot into an error
                match self.vote_repo.count_for_item(item_id).await {
                    Ok(tally) => Ok(VoteOutcome {
                        accepted: true,
                        tally: Some(tally),
                    }),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            item_id = item_id,
                            "Tally read failed after durable vote insert"
                        );
                        Ok(VoteOutcome {
                            accepted: true,
                            tally: None,
                        })
                    }
                }
            }
            VoteInsert::Duplicate => {
                let tally = self
                    .vote_repo
                    .count_for_item(item_id)
                    .await
                    .unwrap_or_default();
                Err(AppError::AlreadyVoted { tally })
            }
        }
    }

    /// Item ids the account has already voted for.
    pub async fn votes_for_account(&self, user_id: &str) -> AppResult<Vec<i32>> {
        self.vote_repo.find_item_ids_by_user(user_id).await
    }

    /// Current tally for a single item.
    pub async fn tally_for_item(&self, item_id: i32) -> AppResult<u64> {
        self.vote_repo.count_for_item(item_id).await
    }

    /// Admin override: append a synthetic vote to an item's ledger.
    ///
    /// The synthetic voter id never collides with a real account, so
    /// the unique index cannot reject it and the adjustment is always
    /// a plain ledger append.
    pub async fn admin_add_vote(&self, item_id: i32, operator: &str) -> AppResult<u64> {
        self.item_repo.get_by_id(item_id).await?;

        let model = vote::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(self.id_gen.generate_synthetic()),
            item_id: Set(item_id),
            created_at: Set(Utc::now().into()),
        };

        // A fresh synthetic id cannot trip the unique index, so the
        // Duplicate arm is unreachable here
        self.vote_repo.insert(model).await?;

        let tally = self.vote_repo.count_for_item(item_id).await?;
        tracing::info!(
            item_id = item_id,
            operator = operator,
            tally = tally,
            "Admin override: vote added"
        );
        Ok(tally)
    }

    /// Admin override: delete the newest vote from an item's ledger.
    /// A no-op on an empty ledger; the current tally comes back either
    /// way.
    pub async fn admin_remove_vote(&self, item_id: i32, operator: &str) -> AppResult<u64> {
        self.item_repo.get_by_id(item_id).await?;

        let Some(latest) = self.vote_repo.find_latest_for_item(item_id).await? else {
            tracing::info!(
                item_id = item_id,
                operator = operator,
                "Admin override: remove-vote on empty ledger, nothing to do"
            );
            return self.vote_repo.count_for_item(item_id).await;
        };

        let removed_id = latest.id.clone();
        self.vote_repo.delete(latest).await?;

        let tally = self.vote_repo.count_for_item(item_id).await?;
        tracing::info!(
            item_id = item_id,
            operator = operator,
            removed_vote_id = %removed_id,
            tally = tally,
            "Admin override: vote removed"
        );
        Ok(tally)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use promovote_db::test_utils::{test_item, test_vote};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::sync::Arc;

    fn fast_retry() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            initial_delay: std::time::Duration::from_millis(1),
            max_delay: std::time::Duration::from_millis(2),
            multiplier: 2.0,
        }
    }

    fn item_repo_with(item: promovote_db::entities::contest_item::Model) -> ContestItemRepository {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[item]])
                .into_connection(),
        );
        ContestItemRepository::new(db)
    }

    fn empty_item_repo() -> ContestItemRepository {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<promovote_db::entities::contest_item::Model>::new()])
                .into_connection(),
        );
        ContestItemRepository::new(db)
    }

    #[tokio::test]
    async fn test_cast_vote_success_returns_tally() {
        let vote = test_vote("v1", "u1", 2);

        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[vote]])
                .append_query_results([[btreemap! {
                    "num_items" => Into::<Value>::into(5i64),
                }]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(2, "Creative Vision")),
            fast_retry(),
        );

        let outcome = svc.cast_vote("u1", 2).await.unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.tally, Some(5));
    }

    #[tokio::test]
    async fn test_cast_vote_unknown_item_rejected() {
        let vote_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            empty_item_repo(),
            fast_retry(),
        );

        let result = svc.cast_vote("u1", 99).await;
        assert!(matches!(result, Err(AppError::InvalidItem(99))));
    }

    #[tokio::test]
    async fn test_cast_vote_duplicate_returns_already_voted_with_tally() {
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([sea_orm::DbErr::Custom(
                    "duplicate key value violates unique constraint \"idx_vote_user_item\""
                        .to_string(),
                )])
                .append_query_results([[btreemap! {
                    "num_items" => Into::<Value>::into(7i64),
                }]])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(2, "Creative Vision")),
            fast_retry(),
        );

        match svc.cast_vote("u1", 2).await {
            Err(AppError::AlreadyVoted { tally }) => assert_eq!(tally, 7),
            other => panic!("Expected AlreadyVoted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cast_vote_tally_failure_still_accepted() {
        let vote = test_vote("v1", "u1", 2);

        // Insert succeeds, the count query afterwards has no prepared
        // result and errors
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[vote]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(2, "Creative Vision")),
            fast_retry(),
        );

        let outcome = svc.cast_vote("u1", 2).await.unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.tally, None);
    }

    #[tokio::test]
    async fn test_votes_for_account() {
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "item_id" => Into::<Value>::into(1i32) },
                    btreemap! { "item_id" => Into::<Value>::into(3i32) },
                ]])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            ContestItemRepository::new(promovote_db::test_utils::empty_mock_db()),
            fast_retry(),
        );

        assert_eq!(svc.votes_for_account("u1").await.unwrap(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_admin_add_vote_returns_new_tally() {
        let vote = test_vote("v9", "ghost-abc", 1);

        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[vote]])
                .append_query_results([[btreemap! {
                    "num_items" => Into::<Value>::into(11i64),
                }]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(1, "16th Batch Promo")),
            fast_retry(),
        );

        assert_eq!(svc.admin_add_vote(1, "admin").await.unwrap(), 11);
    }

    #[tokio::test]
    async fn test_admin_remove_vote_deletes_latest() {
        let latest = test_vote("v5", "u3", 1);

        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[latest]])
                .append_query_results([[btreemap! {
                    "num_items" => Into::<Value>::into(4i64),
                }]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(1, "16th Batch Promo")),
            fast_retry(),
        );

        assert_eq!(svc.admin_remove_vote(1, "admin").await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_admin_remove_vote_empty_ledger_is_noop() {
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<vote::Model>::new()])
                .append_query_results([[btreemap! {
                    "num_items" => Into::<Value>::into(0i64),
                }]])
                .into_connection(),
        );

        let svc = VoteService::new(
            VoteRepository::new(vote_db),
            item_repo_with(test_item(1, "16th Batch Promo")),
            fast_retry(),
        );

        assert_eq!(svc.admin_remove_vote(1, "admin").await.unwrap(), 0);
    }
}
