//! Vote ledger entity.
//!
//! Append-only record of (account, contest item) pairs. The storage
//! layer enforces a unique index on `(user_id, item_id)`; that index,
//! not any application-level check, is the at-most-once guarantee for
//! concurrent vote attempts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Account that cast the vote. May be a synthetic reference for
    /// admin-inserted ballot adjustments.
    #[sea_orm(indexed)]
    pub user_id: String,

    /// Contest item voted for.
    #[sea_orm(indexed)]
    pub item_id: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
