//! Origin record entity.
//!
//! One row per successful signup (and login), recording the network
//! origin the account arrived from. Rows are never mutated or deleted;
//! the only read is the distinct-accounts-per-origin aggregate used by
//! the signup throttle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "origin_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(indexed)]
    pub user_id: String,

    /// Network origin key derived from proxy headers.
    #[sea_orm(indexed)]
    pub origin_key: String,

    pub user_agent: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
