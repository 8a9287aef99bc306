//! Contest item entity.
//!
//! Read-mostly catalog of votable videos. Tallies are never stored
//! here; they are derived by counting vote rows at query time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contest_item")]
pub struct Model {
    /// Stable, externally-known id (1, 2, 3, …).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub title: String,
    pub description: Option<String>,

    /// Public URL of the video in the media store.
    pub media_url: String,

    /// Optional HLS playlist URL for streaming playback.
    pub hls_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
