//! User account entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    /// Unique login identifier.
    #[sea_orm(indexed)]
    pub email: String,

    /// Argon2 password hash. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Blocked accounts keep their data but cannot log in or act.
    pub is_blocked: bool,

    /// `user` or `admin`.
    pub role: String,

    pub avatar_url: Option<String>,
    pub batch_number: Option<String>,
    pub batch_type: Option<String>,
    pub contact: Option<String>,
    pub blood_group: Option<String>,
    pub address: Option<String>,

    /// JSON array of social profile URLs.
    pub social_links: Json,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

// Votes, comments and origin records reference accounts by id without a
// foreign key: deleting an account intentionally leaves orphaned rows
// behind, and synthetic ballot-adjustment votes reference ids that never
// existed as accounts.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
