//! Contest item repository.

use std::sync::Arc;

use crate::entities::{ContestItem, contest_item};
use promovote_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::map_db_err;

/// Contest item repository for database operations.
#[derive(Clone)]
pub struct ContestItemRepository {
    db: Arc<DatabaseConnection>,
}

impl ContestItemRepository {
    /// Create a new contest item repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a contest item by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<contest_item::Model>> {
        ContestItem::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a contest item by ID, rejecting unknown ids.
    pub async fn get_by_id(&self, id: i32) -> AppResult<contest_item::Model> {
        self.find_by_id(id).await?.ok_or(AppError::InvalidItem(id))
    }

    /// All catalog entries, in id order.
    pub async fn find_all(&self) -> AppResult<Vec<contest_item::Model>> {
        ContestItem::find()
            .order_by_asc(contest_item::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_item(id: i32, title: &str) -> contest_item::Model {
        contest_item::Model {
            id,
            title: title.to_string(),
            description: None,
            media_url: format!("/media/{id}.mp4"),
            hls_url: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_invalid_item() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<contest_item::Model>::new()])
                .into_connection(),
        );

        let repo = ContestItemRepository::new(db);
        let result = repo.get_by_id(42).await;

        assert!(matches!(result, Err(AppError::InvalidItem(42))));
    }

    #[tokio::test]
    async fn test_find_all() {
        let items = vec![create_test_item(1, "First"), create_test_item(2, "Second")];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([items])
                .into_connection(),
        );

        let repo = ContestItemRepository::new(db);
        let all = repo.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
    }
}
