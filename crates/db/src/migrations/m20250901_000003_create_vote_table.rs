//! Create vote table migration.
//!
//! The unique index on (user_id, item_id) is the authoritative
//! at-most-once guarantee for voting. Concurrent casts from the same
//! account race down to this constraint; exactly one insert wins.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vote::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Vote::UserId).string_len(64).not_null())
                    .col(ColumnDef::new(Vote::ItemId).integer().not_null())
                    .col(
                        ColumnDef::new(Vote::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: one vote per account per item
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_user_item")
                    .table(Vote::Table)
                    .col(Vote::UserId)
                    .col(Vote::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: item_id (tally recomputation is a count over this)
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_item_id")
                    .table(Vote::Table)
                    .col(Vote::ItemId)
                    .to_owned(),
            )
            .await?;

        // Index: (item_id, created_at) for the remove-latest-vote override
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_item_created_at")
                    .table(Vote::Table)
                    .col(Vote::ItemId)
                    .col(Vote::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vote {
    Table,
    Id,
    UserId,
    ItemId,
    CreatedAt,
}
