//! Test utilities for database operations.
//!
//! Mock-backed connection helpers shared by service and API tests.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::entities::{comment, contest_item, user, vote};

/// An empty mock connection for repositories that are wired but never
/// queried in a given test.
#[must_use]
pub fn empty_mock_db() -> Arc<DatabaseConnection> {
    Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

/// A user model with sensible defaults for tests.
#[must_use]
pub fn test_user(id: &str, email: &str) -> user::Model {
    user::Model {
        id: id.to_string(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$test".to_string(),
        is_blocked: false,
        role: "user".to_string(),
        avatar_url: None,
        batch_number: None,
        batch_type: None,
        contact: None,
        blood_group: None,
        address: None,
        social_links: serde_json::json!([]),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

/// A vote model for tests.
#[must_use]
pub fn test_vote(id: &str, user_id: &str, item_id: i32) -> vote::Model {
    vote::Model {
        id: id.to_string(),
        user_id: user_id.to_string(),
        item_id,
        created_at: Utc::now().into(),
    }
}

/// A contest item model for tests.
#[must_use]
pub fn test_item(id: i32, title: &str) -> contest_item::Model {
    contest_item::Model {
        id,
        title: title.to_string(),
        description: Some("A promo video".to_string()),
        media_url: format!("/media/{id}.mp4"),
        hls_url: None,
        created_at: Utc::now().into(),
    }
}

/// A comment model for tests.
#[must_use]
pub fn test_comment(id: &str, user_id: &str, item_id: i32, content: &str) -> comment::Model {
    comment::Model {
        id: id.to_string(),
        user_id: user_id.to_string(),
        item_id,
        content: content.to_string(),
        created_at: Utc::now().into(),
    }
}
