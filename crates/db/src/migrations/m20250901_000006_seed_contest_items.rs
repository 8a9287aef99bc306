//! Seed the contest item catalog.
//!
//! The catalog is a fixed, enumerable set for the duration of the
//! contest; the three promo entries are seeded here so vote validation
//! has something to join against on a fresh database.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(ContestItem::Table)
            .columns([
                ContestItem::Id,
                ContestItem::Title,
                ContestItem::Description,
                ContestItem::MediaUrl,
            ])
            .values_panic([
                1.into(),
                "16th Batch Promo".into(),
                "Amazing promo video from 16th batch students showcasing their creativity."
                    .into(),
                "/media/16th-promo.mp4".into(),
            ])
            .values_panic([
                2.into(),
                "Creative Vision".into(),
                "A unique perspective on what the contest means to us.".into(),
                "/media/creative-vision.mp4".into(),
            ])
            .values_panic([
                3.into(),
                "Our Journey".into(),
                "Capturing the spirit of learning and growth.".into(),
                "/media/our-journey.mp4".into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(ContestItem::Table)
            .cond_where(Expr::col(ContestItem::Id).is_in([1, 2, 3]))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum ContestItem {
    Table,
    Id,
    Title,
    Description,
    MediaUrl,
}
