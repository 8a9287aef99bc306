//! Vote ledger repository.
//!
//! The ledger is append-only under normal operation; the admin override
//! path may delete the newest row for an item. Tallies are always fresh
//! counts against the ledger, never maintained counters.

use std::sync::Arc;

use crate::entities::{Vote, vote};
use promovote_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use super::{is_unique_violation, map_db_err};

/// Outcome of a ledger insert attempt.
#[derive(Debug)]
pub enum VoteInsert {
    /// The row was written; the vote is durable.
    Inserted(vote::Model),
    /// The storage-level unique constraint rejected the pair. This is
    /// the authoritative already-voted signal; no prior SELECT is made.
    Duplicate,
}

/// Vote repository for database operations.
#[derive(Clone)]
pub struct VoteRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteRepository {
    /// Create a new vote repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attempt to append a vote to the ledger.
    ///
    /// A unique-constraint violation is a normal outcome here, not an
    /// error: concurrent casts from the same account race down to the
    /// index and exactly one insert wins.
    pub async fn insert(&self, model: vote::ActiveModel) -> AppResult<VoteInsert> {
        match model.insert(self.db.as_ref()).await {
            Ok(m) => Ok(VoteInsert::Inserted(m)),
            Err(e) if is_unique_violation(&e) => Ok(VoteInsert::Duplicate),
            Err(e) => Err(map_db_err(e)),
        }
    }

    /// Count ledger rows for an item. This is the tally.
    pub async fn count_for_item(&self, item_id: i32) -> AppResult<u64> {
        Vote::find()
            .filter(vote::Column::ItemId.eq(item_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Tally every item in one aggregate query.
    pub async fn tally_by_item(&self) -> AppResult<Vec<(i32, i64)>> {
        Vote::find()
            .select_only()
            .column(vote::Column::ItemId)
            .column_as(vote::Column::Id.count(), "tally")
            .group_by(vote::Column::ItemId)
            .into_tuple::<(i32, i64)>()
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Item ids a given account has voted for.
    pub async fn find_item_ids_by_user(&self, user_id: &str) -> AppResult<Vec<i32>> {
        Vote::find()
            .filter(vote::Column::UserId.eq(user_id))
            .select_only()
            .column(vote::Column::ItemId)
            .into_tuple::<i32>()
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// The most recently created vote for an item, if any.
    pub async fn find_latest_for_item(&self, item_id: i32) -> AppResult<Option<vote::Model>> {
        Vote::find()
            .filter(vote::Column::ItemId.eq(item_id))
            .order_by_desc(vote::Column::CreatedAt)
            .order_by_desc(vote::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Delete a vote row by id (admin remove-vote override only).
    pub async fn delete(&self, model: vote::Model) -> AppResult<()> {
        model.delete(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(())
    }
}
