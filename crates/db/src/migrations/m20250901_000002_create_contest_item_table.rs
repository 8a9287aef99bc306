//! Create contest item table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContestItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ContestItem::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(ContestItem::Title).string_len(256).not_null())
                    .col(ColumnDef::new(ContestItem::Description).text())
                    .col(ColumnDef::new(ContestItem::MediaUrl).text().not_null())
                    .col(ColumnDef::new(ContestItem::HlsUrl).text())
                    .col(
                        ColumnDef::new(ContestItem::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContestItem::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ContestItem {
    Table,
    Id,
    Title,
    Description,
    MediaUrl,
    HlsUrl,
    CreatedAt,
}
