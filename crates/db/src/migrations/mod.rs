//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_contest_item_table;
mod m20250901_000003_create_vote_table;
mod m20250901_000004_create_origin_record_table;
mod m20250901_000005_create_comment_table;
mod m20250901_000006_seed_contest_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_contest_item_table::Migration),
            Box::new(m20250901_000003_create_vote_table::Migration),
            Box::new(m20250901_000004_create_origin_record_table::Migration),
            Box::new(m20250901_000005_create_comment_table::Migration),
            Box::new(m20250901_000006_seed_contest_items::Migration),
        ]
    }
}
