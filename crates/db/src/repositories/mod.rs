//! Database repositories.

pub mod comment;
pub mod contest_item;
pub mod origin_record;
pub mod user;
pub mod vote;

pub use comment::CommentRepository;
pub use contest_item::ContestItemRepository;
pub use origin_record::OriginRecordRepository;
pub use user::UserRepository;
pub use vote::{VoteInsert, VoteRepository};

use promovote_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Map a database error into the application taxonomy.
///
/// Connectivity-class failures become `ServiceUnavailable` so the retry
/// wrapper re-attempts them; everything else is a non-retryable
/// `Database` error.
pub(crate) fn map_db_err(e: DbErr) -> AppError {
    match &e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            AppError::ServiceUnavailable(e.to_string())
        }
        _ => AppError::Database(e.to_string()),
    }
}

/// Whether the error is a unique-constraint violation.
///
/// The driver-reported violation is the authoritative signal for
/// duplicate votes; the message fallback covers backends (and mocks)
/// that do not surface a structured SQL error.
pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = e.to_string();
    msg.contains("duplicate key") || msg.contains("UNIQUE constraint")
}
