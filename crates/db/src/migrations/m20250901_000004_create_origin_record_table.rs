//! Create origin record table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OriginRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OriginRecord::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OriginRecord::UserId).string_len(64).not_null())
                    .col(ColumnDef::new(OriginRecord::OriginKey).string_len(64).not_null())
                    .col(
                        ColumnDef::new(OriginRecord::UserAgent)
                            .string_len(512)
                            .not_null()
                            .default("Unknown"),
                    )
                    .col(
                        ColumnDef::new(OriginRecord::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: origin_key (the throttle counts distinct accounts per origin)
        manager
            .create_index(
                Index::create()
                    .name("idx_origin_record_origin_key")
                    .table(OriginRecord::Table)
                    .col(OriginRecord::OriginKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_origin_record_user_id")
                    .table(OriginRecord::Table)
                    .col(OriginRecord::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OriginRecord::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OriginRecord {
    Table,
    Id,
    UserId,
    OriginKey,
    UserAgent,
    CreatedAt,
}
