//! Origin record repository.

use std::sync::Arc;

use crate::entities::{OriginRecord, origin_record};
use promovote_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

use super::map_db_err;

/// Origin record repository for database operations.
#[derive(Clone)]
pub struct OriginRecordRepository {
    db: Arc<DatabaseConnection>,
}

impl OriginRecordRepository {
    /// Create a new origin record repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Append an origin record.
    ///
    /// Callers treat this as best-effort; the service layer swallows
    /// failures so a tracking problem never fails signup or login.
    pub async fn create(
        &self,
        model: origin_record::ActiveModel,
    ) -> AppResult<origin_record::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Count distinct accounts seen from an origin.
    ///
    /// This feeds the signup throttle. The read and the subsequent
    /// account creation are not atomic: two concurrent signups from a
    /// fresh origin can both pass the check. Accepted as a soft limit.
    pub async fn count_distinct_accounts(&self, origin_key: &str) -> AppResult<u64> {
        OriginRecord::find()
            .filter(origin_record::Column::OriginKey.eq(origin_key))
            .select_only()
            .column(origin_record::Column::UserId)
            .distinct()
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
