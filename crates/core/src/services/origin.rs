//! Origin tracking service.
//!
//! Bounds the number of accounts created from a single network origin.
//! Recording is best-effort: a failed write degrades the throttle, it
//! never fails the surrounding signup or login.

use chrono::Utc;
use promovote_common::{AppError, AppResult, IdGenerator};
use promovote_db::{entities::origin_record, repositories::OriginRecordRepository};
use sea_orm::Set;

/// Origin tracking service.
#[derive(Clone)]
pub struct OriginService {
    origin_repo: OriginRecordRepository,
    id_gen: IdGenerator,
    account_limit: u64,
}

impl OriginService {
    /// Create a new origin service.
    #[must_use]
    pub const fn new(origin_repo: OriginRecordRepository, account_limit: u64) -> Self {
        Self {
            origin_repo,
            id_gen: IdGenerator::new(),
            account_limit,
        }
    }

    /// Reject signup when the origin has already produced the maximum
    /// number of distinct accounts.
    ///
    /// Check-then-act: two concurrent signups from a fresh origin can
    /// both pass before either records. This is a documented soft
    /// limit, not a hard security boundary; a transactional fix would
    /// trade false positives for legitimate shared-network users
    /// against a narrow race window.
    pub async fn ensure_within_limit(&self, origin_key: &str) -> AppResult<()> {
        let count = self.origin_repo.count_distinct_accounts(origin_key).await?;

        if count >= self.account_limit {
            tracing::info!(
                origin_key = origin_key,
                accounts = count,
                limit = self.account_limit,
                "Signup rejected: origin account limit reached"
            );
            return Err(AppError::OriginLimitExceeded);
        }

        Ok(())
    }

    /// Record that an account was seen at an origin. Best-effort.
    pub async fn record(&self, user_id: &str, origin_key: &str, user_agent: &str) {
        let model = origin_record::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(user_id.to_string()),
            origin_key: Set(origin_key.to_string()),
            user_agent: Set(user_agent.to_string()),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = self.origin_repo.create(model).await {
            tracing::warn!(
                error = %e,
                user_id = user_id,
                origin_key = origin_key,
                "Failed to record origin; throttle degraded"
            );
        }
    }

    /// Number of distinct accounts seen from an origin.
    pub async fn count_accounts(&self, origin_key: &str) -> AppResult<u64> {
        self.origin_repo.count_distinct_accounts(origin_key).await
    }
}
